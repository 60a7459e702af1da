//! Iterative sum-of-squares task.

use tracing::debug;

use crate::progress::ProgressEvent;
use crate::task::{Task, TaskContext, TaskKind, TaskOutput};

/// Compute 1² + 2² + ... + n² without pacing.
///
/// # Example
/// ```
/// assert_eq!(threadcalc_core::sum_of_squares(3), 14);
/// assert_eq!(threadcalc_core::sum_of_squares(10), 385);
/// ```
#[must_use]
pub fn sum_of_squares(n: u32) -> u64 {
    (1..=u64::from(n)).fold(0u64, |sum, i| sum.saturating_add(i.saturating_mul(i)))
}

/// Sum of squares accumulated one term per paced iteration.
#[derive(Debug, Default, Clone, Copy)]
pub struct SumOfSquaresTask;

impl SumOfSquaresTask {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Task for SumOfSquaresTask {
    fn kind(&self) -> TaskKind {
        TaskKind::SumOfSquares
    }

    fn total_steps(&self, n: u32) -> u32 {
        n
    }

    fn compute(&self, n: u32, ctx: &TaskContext<'_>) -> TaskOutput {
        let kind = self.kind();
        let total = self.total_steps(n);
        ctx.notify(kind, n, 0, total, ProgressEvent::Started);

        let mut output = TaskOutput::default();
        for i in 1..=n {
            let term = u64::from(i);
            output.value = output.value.saturating_add(term.saturating_mul(term));
            debug!(worker = ctx.worker, step = i, sum = output.value, "sum of squares step");
            if ctx.step(kind, n, i, total) {
                output.interruptions += 1;
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::{NoOpObserver, RecordingObserver};
    use crate::pacing::{Pacer, Pacing};

    fn run(n: u32) -> TaskOutput {
        let pacer = Pacer::uninterruptible(Pacing::unpaced());
        let observer = NoOpObserver::new();
        let ctx = TaskContext::new("test", &pacer, &observer);
        SumOfSquaresTask::new().compute(n, &ctx)
    }

    #[test]
    fn known_values() {
        assert_eq!(run(1).value, 1);
        assert_eq!(run(3).value, 14);
        assert_eq!(run(10).value, 385);
        assert_eq!(run(20).value, 2870);
    }

    #[test]
    fn matches_closed_form() {
        for n in 1..=20u64 {
            let expected = n * (n + 1) * (2 * n + 1) / 6;
            assert_eq!(run(u32::try_from(n).unwrap()).value, expected, "n={n}");
        }
    }

    #[test]
    fn zero_is_empty_sum() {
        assert_eq!(run(0).value, 0);
        assert_eq!(sum_of_squares(0), 0);
    }

    #[test]
    fn one_step_per_term() {
        let pacer = Pacer::uninterruptible(Pacing::unpaced());
        let observer = RecordingObserver::new();
        let ctx = TaskContext::new("worker-2", &pacer, &observer);
        SumOfSquaresTask::new().compute(4, &ctx);

        let steps: Vec<u32> = observer
            .updates()
            .iter()
            .filter(|u| u.event == ProgressEvent::Step)
            .map(|u| u.step)
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);
    }

    #[test]
    fn idempotent() {
        assert_eq!(run(17), run(17));
    }

    #[test]
    fn interrupted_pause_does_not_change_result() {
        let (pacer, handle) = Pacer::new(Pacing::unpaced());
        let observer = NoOpObserver::new();
        let ctx = TaskContext::new("worker-2", &pacer, &observer);
        handle.interrupt();
        let output = SumOfSquaresTask::new().compute(10, &ctx);

        assert_eq!(output.value, 385);
        assert_eq!(output.interruptions, 1);
    }
}
