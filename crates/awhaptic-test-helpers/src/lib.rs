//! Shared test utilities for awhaptic.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Timing and register-journal assertion macros
//! - [`probe`] - Completion handles that record when they fire
//! - [`scheduler`] - Deterministic and failing completion schedulers
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! awhaptic-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use awhaptic_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test helpers panic on failed expectations"
)]

pub mod assertions;
pub mod must;
pub mod prelude;
pub mod probe;
pub mod scheduler;

pub use must::*;
pub use probe::CompletionProbe;
pub use scheduler::{ManualScheduler, RejectingScheduler};

#[doc(hidden)]
pub mod __private {
    pub use awhaptic_registers::Node;
}
