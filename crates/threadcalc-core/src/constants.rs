//! Constants for request validation and pacing.

/// Smallest accepted input count for a calculation request.
pub const MIN_N: u32 = 1;

/// Largest accepted input count for a calculation request.
pub const MAX_N: u32 = 20;

/// Default pause inserted after every loop iteration, in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 5;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The request was rejected before any worker was created.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// A worker could not be spawned or died without a result.
    pub const ERROR_WORKER: i32 = 3;
}
