//! Error types for awhapticctl

use std::process::ExitCode;
use std::sync::mpsc::RecvTimeoutError;

use awhaptic_vibrator::{ErrorKind, VibratorError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Completion was not delivered: {0}")]
    CompletionNotDelivered(#[from] RecvTimeoutError),
}

/// Process exit code for a failed command.
///
/// Code 2 stays reserved for clap usage errors.
pub fn exit_code(error: &anyhow::Error) -> ExitCode {
    if let Some(e) = error.downcast_ref::<VibratorError>() {
        return match e.kind() {
            ErrorKind::IllegalArgument => ExitCode::from(3),
            ErrorKind::UnsupportedOperation => ExitCode::from(4),
            ErrorKind::IoFailure => ExitCode::from(5),
            ErrorKind::SchedulingFailure => ExitCode::from(6),
        };
    }
    match error.downcast_ref::<CliError>() {
        Some(CliError::CompletionNotDelivered(_)) => ExitCode::from(7),
        _ => ExitCode::FAILURE,
    }
}

/// Short type name used in JSON error output.
pub fn error_type_name(error: &anyhow::Error) -> &'static str {
    if let Some(e) = error.downcast_ref::<VibratorError>() {
        return match e.kind() {
            ErrorKind::IllegalArgument => "illegal_argument",
            ErrorKind::UnsupportedOperation => "unsupported_operation",
            ErrorKind::IoFailure => "io_failure",
            ErrorKind::SchedulingFailure => "scheduling_failure",
        };
    }
    match error.downcast_ref::<CliError>() {
        Some(CliError::CompletionNotDelivered(_)) => "completion_not_delivered",
        None => "error",
    }
}
