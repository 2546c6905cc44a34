//! # awhaptic-registers
//!
//! Register port abstraction for the vibrator's control nodes.
//!
//! The haptic driver exposes its programming interface as a fixed set of
//! text files (one value per file). This crate provides:
//! - [`Node`] - the closed set of control points the driver exposes
//! - [`RegisterPort`] - the write/read/exists contract used by the dispatch engine
//! - [`SysfsRegisterPort`] - the production port backed by the node files
//! - [`MemoryRegisterPort`] - an in-memory port with a write journal, for tests and dry runs
//! - [`RegisterConfig`] - where the node files live
//!
//! ## Failure policy
//!
//! Writes are synchronous and fail fast. Nothing in this crate retries;
//! callers decide what a failed write means for the command in flight.
//!
//! ## Example
//!
//! ```rust
//! use awhaptic_registers::prelude::*;
//!
//! let port = MemoryRegisterPort::with_all_nodes();
//! port.write_int(Node::Gain, 96).expect("gain node present");
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

pub mod config;
pub mod error;
pub mod memory;
pub mod node;
pub mod port;
pub mod prelude;
pub mod sysfs;

pub use config::RegisterConfig;
pub use error::{RegisterError, RegisterResult};
pub use memory::{MemoryRegisterPort, RegisterWrite};
pub use node::Node;
pub use port::RegisterPort;
pub use sysfs::SysfsRegisterPort;
