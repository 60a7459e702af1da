//! # threadcalc-orchestration
//!
//! Worker threads, single and concurrent-pair runs, and reporting interfaces.

pub mod interfaces;
pub mod orchestrator;
pub mod worker;

pub use interfaces::{
    CalculationResult, PairReport, ResultPresenter, RunReporter, SingleReport,
};
pub use orchestrator::Orchestrator;
pub use worker::Worker;
