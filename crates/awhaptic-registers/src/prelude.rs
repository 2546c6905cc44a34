//! Prelude for awhaptic-registers.
//!
//! ```rust
//! use awhaptic_registers::prelude::*;
//!
//! let port = MemoryRegisterPort::with_all_nodes();
//! assert!(port.exists(Node::Activate));
//! ```

pub use crate::config::{DEFAULT_REGISTER_ROOT, REGISTER_ROOT_ENV, RegisterConfig};
pub use crate::error::{RegisterError, RegisterResult};
pub use crate::memory::{MemoryRegisterPort, RegisterWrite};
pub use crate::node::Node;
pub use crate::port::RegisterPort;
pub use crate::sysfs::SysfsRegisterPort;
