//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use awhaptic_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_some};
pub use crate::probe::CompletionProbe;
pub use crate::scheduler::{ManualScheduler, RejectingScheduler};
pub use crate::{assert_elapsed_between, assert_writes};

/// Return type for tests that use `?`.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;
