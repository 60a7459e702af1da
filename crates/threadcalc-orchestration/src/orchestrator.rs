//! Core orchestration: single and concurrent-pair runs.
//!
//! Requests are validated before any thread exists. Workers are joined in
//! start order and their slots are read only after the join returns.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use threadcalc_core::observer::ProgressObserver;
use threadcalc_core::observers::NoOpObserver;
use threadcalc_core::pacing::Pacing;
use threadcalc_core::registry::{DefaultTaskFactory, TaskFactory};
use threadcalc_core::request::CalculationRequest;
use threadcalc_core::task::{CalcError, TaskKind};

use crate::interfaces::{PairReport, RunReporter, SingleReport};
use crate::worker::Worker;

/// Runs tasks on dedicated worker threads.
pub struct Orchestrator {
    factory: Arc<dyn TaskFactory>,
    pacing: Pacing,
    observer: Arc<dyn ProgressObserver>,
}

impl Orchestrator {
    /// Create an orchestrator using the default task factory.
    #[must_use]
    pub fn new(pacing: Pacing, observer: Arc<dyn ProgressObserver>) -> Self {
        Self::with_factory(Arc::new(DefaultTaskFactory::new()), pacing, observer)
    }

    /// Create an orchestrator with a custom task factory.
    #[must_use]
    pub fn with_factory(
        factory: Arc<dyn TaskFactory>,
        pacing: Pacing,
        observer: Arc<dyn ProgressObserver>,
    ) -> Self {
        Self {
            factory,
            pacing,
            observer,
        }
    }

    fn spawn(&self, index: usize, request: CalculationRequest) -> Result<Worker, CalcError> {
        Worker::spawn(
            index,
            self.factory.get(request.kind()),
            request.n(),
            self.pacing,
            Arc::clone(&self.observer),
        )
    }

    /// Run one task on one worker and wait for it.
    pub fn run_single(
        &self,
        n: i64,
        kind: TaskKind,
        reporter: &dyn RunReporter,
    ) -> Result<SingleReport, CalcError> {
        let request = CalculationRequest::new(n, kind)?;

        let start = Instant::now();
        let worker = self.spawn(1, request)?;
        reporter.worker_started(worker.name(), kind, request.n());

        reporter.waiting(1);
        let name = worker.name().to_string();
        let result = worker.join()?;
        reporter.worker_finished(&name);

        let total = start.elapsed();
        info!(
            task = kind.short_name(),
            n = request.n(),
            total = ?total,
            "single run complete"
        );
        Ok(SingleReport { result, total })
    }

    /// Run both tasks concurrently on two workers and wait for both.
    ///
    /// The Fibonacci worker is started, and joined, first.
    pub fn run_pair(&self, n: i64, reporter: &dyn RunReporter) -> Result<PairReport, CalcError> {
        let fib_request = CalculationRequest::new(n, TaskKind::Fibonacci)?;
        let sum_request = CalculationRequest::new(n, TaskKind::SumOfSquares)?;

        let start = Instant::now();
        let fib_worker = self.spawn(1, fib_request)?;
        reporter.worker_started(fib_worker.name(), TaskKind::Fibonacci, fib_request.n());
        let sum_worker = match self.spawn(2, sum_request) {
            Ok(worker) => worker,
            Err(e) => {
                // Don't leave the first worker detached.
                let _ = fib_worker.join();
                return Err(e);
            }
        };
        reporter.worker_started(
            sum_worker.name(),
            TaskKind::SumOfSquares,
            sum_request.n(),
        );

        reporter.waiting(2);
        let fib_name = fib_worker.name().to_string();
        let sum_name = sum_worker.name().to_string();

        let fibonacci = fib_worker.join();
        reporter.worker_finished(&fib_name);
        let sum_of_squares = sum_worker.join();
        reporter.worker_finished(&sum_name);

        let total = start.elapsed();
        info!(n = fib_request.n(), total = ?total, "pair run complete");
        Ok(PairReport {
            fibonacci: fibonacci?,
            sum_of_squares: sum_of_squares?,
            total,
        })
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(Pacing::default(), Arc::new(NoOpObserver::new()))
    }
}
