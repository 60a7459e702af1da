//! Progress updates emitted by running tasks.

use crate::task::TaskKind;

/// What happened at a given point of a task's run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// The task began computing.
    Started,
    /// An iteration finished; the task is about to pause.
    Step,
    /// The pause after an iteration was cut short.
    Interrupted,
    /// The task produced its value.
    Completed { value: u64 },
}

/// Progress update sent from a worker to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Name of the worker thread.
    pub worker: String,
    /// Task being computed.
    pub task: TaskKind,
    /// Input count.
    pub n: u32,
    /// Iterations completed so far.
    pub step: u32,
    /// Total iterations for this input.
    pub total_steps: u32,
    /// What this update reports.
    pub event: ProgressEvent,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(
        worker: &str,
        task: TaskKind,
        n: u32,
        step: u32,
        total_steps: u32,
        event: ProgressEvent,
    ) -> Self {
        Self {
            worker: worker.to_string(),
            task,
            n,
            step,
            total_steps,
            event,
        }
    }

    /// Completed fraction in [0.0, 1.0].
    ///
    /// Tasks with no paced iterations count as done once they complete.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total_steps == 0 {
            return if matches!(self.event, ProgressEvent::Completed { .. }) {
                1.0
            } else {
                0.0
            };
        }
        (f64::from(self.step) / f64::from(self.total_steps)).min(1.0)
    }

    /// Whether this is the final update of a run.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.event, ProgressEvent::Completed { .. })
    }
}
