//! # awhaptic-vibrator
//!
//! Effect dispatch and timing engine for register-driven vibrators.
//!
//! The engine turns a small set of abstract haptic commands into ordered
//! register writes and reports completion of each command asynchronously:
//! - [`Vibrator`] - the command surface (on/off/perform/amplitude/queries)
//! - [`ModeSequencer`] - ordered register programming for an [`OperatingMode`]
//! - [`CompletionScheduler`] - timed, single-shot completion notification
//! - [`Capabilities`] and [`ExtendedOperation`] - what the device does and does not do
//!
//! ## Command flow
//!
//! ```text
//! caller ──► Vibrator ──validate──► EffectTable
//!               │
//!               ├──program──► ModeSequencer ──► RegisterPort
//!               │
//!               ├──schedule─► CompletionScheduler ──(delay)──► CompletionHandle
//!               │
//!               ◄──return─── (immediately, except the DOUBLE_CLICK second pulse)
//! ```
//!
//! Validation fails before any register is written. A failing write aborts
//! the rest of the command and nothing is rolled back. Completion is only
//! scheduled once programming has succeeded, so it can never be reported
//! for hardware that was not armed.
//!
//! ## Example
//!
//! ```rust
//! use awhaptic_vibrator::prelude::*;
//!
//! let port = MemoryRegisterPort::with_all_nodes();
//! let vibrator = Vibrator::new(port.clone());
//!
//! let duration = vibrator
//!     .perform(Effect::Click, Strength::Medium, None)
//!     .expect("click is supported");
//! assert_eq!(duration, 12);
//! assert_eq!(port.read_int(Node::Gain, -1), 96);
//! ```

#![deny(
    unsafe_op_in_unsafe_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::panic,
    missing_docs,
    missing_debug_implementations
)]
#![warn(clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod capabilities;
pub mod completion;
pub mod config;
pub mod error;
pub mod extended;
pub mod mode;
pub mod prelude;
pub mod request;
pub mod scheduler;
pub mod sequencer;
pub mod service;

pub use capabilities::Capabilities;
pub use completion::{CompletionError, CompletionHandle};
pub use config::{VibratorConfig, VibratorConfigBuilder};
pub use error::{ErrorKind, VibratorError, VibratorResult};
pub use extended::ExtendedOperation;
pub use mode::OperatingMode;
pub use request::PlaybackRequest;
pub use scheduler::{CompletionScheduler, ScheduleError, ThreadScheduler, TimedTask};
pub use sequencer::ModeSequencer;
pub use service::{NodeReport, Vibrator};
