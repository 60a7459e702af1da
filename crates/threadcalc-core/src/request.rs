//! Validated calculation requests.

use crate::constants::{MAX_N, MIN_N};
use crate::task::{CalcError, TaskKind};

/// An input count in `MIN_N..=MAX_N` paired with the task to run on it.
///
/// The only constructor validates the range, so holding a request means no
/// further checks are needed before spawning a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationRequest {
    n: u32,
    kind: TaskKind,
}

impl CalculationRequest {
    /// Validate `n` and build a request.
    pub fn new(n: i64, kind: TaskKind) -> Result<Self, CalcError> {
        Ok(Self {
            n: validate_n(n)?,
            kind,
        })
    }

    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    #[must_use]
    pub fn kind(&self) -> TaskKind {
        self.kind
    }
}

/// Check that `n` lies in `MIN_N..=MAX_N`.
pub fn validate_n(n: i64) -> Result<u32, CalcError> {
    u32::try_from(n)
        .ok()
        .filter(|n| (MIN_N..=MAX_N).contains(n))
        .ok_or(CalcError::OutOfRange {
            n,
            min: MIN_N,
            max: MAX_N,
        })
}
