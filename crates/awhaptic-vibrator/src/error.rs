//! Error taxonomy for vibrator commands.
//!
//! Callers branch on [`ErrorKind`]; the individual variants carry enough
//! detail for logs.

use core::fmt;

use awhaptic_effects::{Effect, Strength};
use awhaptic_registers::RegisterError;
use thiserror::Error;

use crate::completion::CompletionHandle;
use crate::extended::ExtendedOperation;
use crate::scheduler::ScheduleError;

/// Binder-style exception code for an illegal argument.
pub const EX_ILLEGAL_ARGUMENT: i32 = -3;
/// Binder-style exception code for an illegal state.
pub const EX_ILLEGAL_STATE: i32 = -5;
/// Binder-style exception code for an unsupported operation.
pub const EX_UNSUPPORTED_OPERATION: i32 = -7;

/// Errors returned by vibrator commands.
#[derive(Debug, Error)]
pub enum VibratorError {
    /// The effect is not in the effect table.
    #[error("Effect {0} is not supported")]
    UnsupportedEffect(Effect),

    /// The strength is not in the strength table.
    #[error("Strength {0} is not supported")]
    UnsupportedStrength(Strength),

    /// The operation is outside what this device implements.
    #[error("Operation '{0}' is not supported")]
    UnsupportedOperation(ExtendedOperation),

    /// An argument is outside its accepted range.
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// The vibrator configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A register write failed; the command was aborted at that step.
    #[error("Register access failed: {0}")]
    Io(#[from] RegisterError),

    /// The completion task could not be started.
    ///
    /// The caller's completion handle is returned un-invoked.
    #[error("Failed to schedule {label} completion: {source}")]
    Scheduling {
        /// Command the completion belonged to.
        label: &'static str,
        /// Why the task could not be started.
        #[source]
        source: std::io::Error,
        /// The handle that was never invoked.
        handle: Option<CompletionHandle>,
    },
}

impl VibratorError {
    /// Create an illegal argument error.
    #[must_use]
    pub fn illegal_argument(msg: impl Into<String>) -> Self {
        Self::IllegalArgument(msg.into())
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Classify the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedEffect(_)
            | Self::UnsupportedStrength(_)
            | Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::IllegalArgument(_) | Self::InvalidConfiguration(_) => ErrorKind::IllegalArgument,
            Self::Io(_) => ErrorKind::IoFailure,
            Self::Scheduling { .. } => ErrorKind::SchedulingFailure,
        }
    }

    /// Binder-style exception code for this error.
    #[must_use]
    pub fn exception_code(&self) -> i32 {
        self.kind().exception_code()
    }

    /// Recover the completion handle of a command whose completion could
    /// not be scheduled.
    #[must_use]
    pub fn into_completion_handle(self) -> Option<CompletionHandle> {
        match self {
            Self::Scheduling { handle, .. } => handle,
            _ => None,
        }
    }
}

impl From<ScheduleError> for VibratorError {
    fn from(e: ScheduleError) -> Self {
        let (label, source, handle) = e.into_parts();
        Self::Scheduling {
            label,
            source,
            handle,
        }
    }
}

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown effect or strength, or an extended operation.
    UnsupportedOperation,
    /// Argument or configuration out of range.
    IllegalArgument,
    /// A register write failed.
    IoFailure,
    /// A completion task could not be started.
    SchedulingFailure,
}

impl ErrorKind {
    /// Binder-style exception code.
    #[must_use]
    pub fn exception_code(self) -> i32 {
        match self {
            ErrorKind::UnsupportedOperation => EX_UNSUPPORTED_OPERATION,
            ErrorKind::IllegalArgument => EX_ILLEGAL_ARGUMENT,
            ErrorKind::IoFailure | ErrorKind::SchedulingFailure => EX_ILLEGAL_STATE,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnsupportedOperation => write!(f, "UnsupportedOperation"),
            ErrorKind::IllegalArgument => write!(f, "IllegalArgument"),
            ErrorKind::IoFailure => write!(f, "IoFailure"),
            ErrorKind::SchedulingFailure => write!(f, "SchedulingFailure"),
        }
    }
}

/// A specialized `Result` type for vibrator commands.
pub type VibratorResult<T> = std::result::Result<T, VibratorError>;
