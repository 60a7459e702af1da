//! Orchestration interfaces.

use std::time::Duration;

use threadcalc_core::task::TaskKind;

/// Hooks for narrating a run's thread lifecycle.
///
/// Called on the orchestrating thread only. Every method defaults to doing
/// nothing.
pub trait RunReporter: Send + Sync {
    /// A worker thread was created and is running `kind` on `n`.
    fn worker_started(&self, _worker: &str, _kind: TaskKind, _n: u32) {}

    /// The orchestrator is about to block joining `workers` threads.
    fn waiting(&self, _workers: usize) {}

    /// A worker was joined.
    fn worker_finished(&self, _worker: &str) {}
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the outcome of a single-task run.
    fn present_single(&self, report: &SingleReport);

    /// Present the outcome of a concurrent-pair run.
    fn present_pair(&self, report: &PairReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result read from a worker's slot after join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    /// Name of the worker thread that computed the value.
    pub worker: String,
    /// Task that ran.
    pub kind: TaskKind,
    /// Input count.
    pub n: u32,
    /// The computed value.
    pub value: u64,
    /// Time spent inside the worker's task.
    pub duration: Duration,
    /// Pauses that were cut short.
    pub interruptions: u32,
}

/// Outcome of a single-task run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleReport {
    pub result: CalculationResult,
    /// Wall-clock time from worker creation to join.
    pub total: Duration,
}

/// Outcome of a concurrent-pair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    pub fibonacci: CalculationResult,
    pub sum_of_squares: CalculationResult,
    /// Wall-clock time from the first start to the last join.
    pub total: Duration,
}

impl PairReport {
    /// Both results in start order.
    #[must_use]
    pub fn results(&self) -> [&CalculationResult; 2] {
        [&self.fibonacci, &self.sum_of_squares]
    }
}

/// Reporter that stays silent.
pub struct NullRunReporter;

impl RunReporter for NullRunReporter {}
