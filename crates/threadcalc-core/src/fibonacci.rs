//! Iterative Fibonacci task.

use tracing::debug;

use crate::progress::ProgressEvent;
use crate::task::{Task, TaskContext, TaskKind, TaskOutput};

/// Compute F(n) without pacing (F(0) = 0, F(1) = 1).
///
/// Saturates at `u64::MAX` past F(93).
///
/// # Example
/// ```
/// assert_eq!(threadcalc_core::fibonacci(10), 55);
/// assert_eq!(threadcalc_core::fibonacci(0), 0);
/// ```
#[must_use]
pub fn fibonacci(n: u32) -> u64 {
    if n < 2 {
        return u64::from(n);
    }
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 2..=n {
        let next = prev.saturating_add(curr);
        prev = curr;
        curr = next;
    }
    curr
}

/// Fibonacci over a (prev, curr) pair, pausing after each advance.
#[derive(Debug, Default, Clone, Copy)]
pub struct FibonacciTask;

impl FibonacciTask {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Task for FibonacciTask {
    fn kind(&self) -> TaskKind {
        TaskKind::Fibonacci
    }

    fn total_steps(&self, n: u32) -> u32 {
        n.saturating_sub(1)
    }

    fn compute(&self, n: u32, ctx: &TaskContext<'_>) -> TaskOutput {
        let kind = self.kind();
        let total = self.total_steps(n);
        ctx.notify(kind, n, 0, total, ProgressEvent::Started);

        // F(0) and F(1) short-circuit with no pacing.
        let mut output = TaskOutput {
            value: u64::from(n.min(1)),
            interruptions: 0,
        };
        if n >= 2 {
            let (mut prev, mut curr) = (0u64, 1u64);
            for step in 1..=total {
                let next = prev.saturating_add(curr);
                prev = curr;
                curr = next;
                debug!(worker = ctx.worker, step, value = curr, "fibonacci step");
                if ctx.step(kind, n, step, total) {
                    output.interruptions += 1;
                }
            }
            output.value = curr;
        }

        ctx.notify(
            kind,
            n,
            total,
            total,
            ProgressEvent::Completed {
                value: output.value,
            },
        );
        output
    }
}
