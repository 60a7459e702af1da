//! # threadcalc-core
//!
//! Core library for threadcalc: the Fibonacci and sum-of-squares tasks,
//! validated calculation requests, per-step pacing, and progress observers.

pub mod constants;
pub mod fibonacci;
pub mod observer;
pub mod observers;
pub mod pacing;
pub mod progress;
pub mod registry;
pub mod request;
pub mod sum_of_squares;
pub mod task;

// Re-exports
pub use constants::{exit_codes, DEFAULT_STEP_DELAY_MS, MAX_N, MIN_N};
pub use fibonacci::{fibonacci, FibonacciTask};
pub use observer::{ProgressObserver, ProgressSubject};
pub use pacing::{InterruptHandle, PauseOutcome, Pacer, Pacing};
pub use progress::{ProgressEvent, ProgressUpdate};
pub use registry::{DefaultTaskFactory, TaskFactory};
pub use request::CalculationRequest;
pub use sum_of_squares::{sum_of_squares, SumOfSquaresTask};
pub use task::{CalcError, Task, TaskContext, TaskKind, TaskOutput};
