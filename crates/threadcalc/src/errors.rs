//! Error handling and exit codes.

use threadcalc_core::constants::exit_codes;
use threadcalc_core::task::CalcError;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::OutOfRange { .. } | CalcError::UnknownTask(_) => {
            exit_codes::ERROR_INVALID_INPUT
        }
        CalcError::Spawn(_) | CalcError::WorkerLost(_) => exit_codes::ERROR_WORKER,
    }
}

/// Exit code for an application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CalcError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
