//! Task trait, task kinds, and the error type shared across the workspace.
//!
//! A `Task` is a pure computation over an input count. The `TaskContext`
//! passed to it supplies the worker name, the pacer that makes each loop
//! iteration observably slow, and the progress observer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::observer::ProgressObserver;
use crate::pacing::{PauseOutcome, Pacer};
use crate::progress::{ProgressEvent, ProgressUpdate};

/// Error type for calculation requests and worker lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The input count is outside the accepted range.
    #[error("number must be between {min} and {max} (got {n})")]
    OutOfRange { n: i64, min: u32, max: u32 },

    /// No task is registered under the given name.
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// The OS refused to create a worker thread.
    #[error("failed to spawn worker: {0}")]
    Spawn(String),

    /// A worker terminated without delivering its result.
    #[error("worker {0} terminated without producing a result")]
    WorkerLost(String),
}

/// The computations a worker can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// The nth Fibonacci number.
    Fibonacci,
    /// The sum of the squares of 1..=n.
    SumOfSquares,
}

impl TaskKind {
    /// All task kinds in concurrent-pair start order.
    pub const ALL: [TaskKind; 2] = [TaskKind::Fibonacci, TaskKind::SumOfSquares];

    /// Human-readable name, e.g. "Sum of Squares".
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Fibonacci => "Fibonacci",
            Self::SumOfSquares => "Sum of Squares",
        }
    }

    /// Short name used on the command line and in logs.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Fibonacci => "fib",
            Self::SumOfSquares => "sumsq",
        }
    }

    /// Map a numbered menu selector (1 or 2) to a task kind.
    #[must_use]
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(Self::Fibonacci),
            2 => Some(Self::SumOfSquares),
            _ => None,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TaskKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fib" | "fibonacci" => Ok(Self::Fibonacci),
            "sumsq" | "sum-of-squares" | "sum_of_squares" => Ok(Self::SumOfSquares),
            other => Err(CalcError::UnknownTask(other.to_string())),
        }
    }
}

/// Value produced by a task, together with how many pauses were cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskOutput {
    /// The computed value.
    pub value: u64,
    /// Number of pauses that ended early because the worker was interrupted.
    pub interruptions: u32,
}

/// Per-run environment handed to a task by its worker.
pub struct TaskContext<'a> {
    /// Name of the thread running the task.
    pub worker: &'a str,
    /// Pacer used between iterations.
    pub pacer: &'a Pacer,
    /// Receives progress updates.
    pub observer: &'a dyn ProgressObserver,
}

impl<'a> TaskContext<'a> {
    #[must_use]
    pub fn new(worker: &'a str, pacer: &'a Pacer, observer: &'a dyn ProgressObserver) -> Self {
        Self {
            worker,
            pacer,
            observer,
        }
    }

    /// Emit a progress update for this worker.
    pub fn notify(
        &self,
        task: TaskKind,
        n: u32,
        step: u32,
        total_steps: u32,
        event: ProgressEvent,
    ) {
        self.observer.on_progress(&ProgressUpdate::new(
            self.worker,
            task,
            n,
            step,
            total_steps,
            event,
        ));
    }

    /// Report a finished iteration, then pause.
    ///
    /// An interrupted pause is logged and reported; the caller carries on.
    /// Returns `true` if the pause was interrupted.
    pub fn step(&self, task: TaskKind, n: u32, step: u32, total_steps: u32) -> bool {
        self.notify(task, n, step, total_steps, ProgressEvent::Step);
        match self.pacer.pause() {
            PauseOutcome::Elapsed => false,
            PauseOutcome::Interrupted => {
                warn!(
                    worker = self.worker,
                    task = task.short_name(),
                    step,
                    "pause interrupted, continuing"
                );
                self.notify(task, n, step, total_steps, ProgressEvent::Interrupted);
                true
            }
        }
    }
}

/// A paced computation over an input count.
pub trait Task: Send + Sync {
    /// Which computation this is.
    fn kind(&self) -> TaskKind;

    /// Number of paced iterations `compute` performs for `n`.
    fn total_steps(&self, n: u32) -> u32;

    /// Run the computation, pausing after each iteration.
    fn compute(&self, n: u32, ctx: &TaskContext<'_>) -> TaskOutput;
}
