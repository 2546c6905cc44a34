//! Common imports for driving a vibrator.
//!
//! ```
//! use awhaptic_vibrator::prelude::*;
//! ```

pub use crate::capabilities::Capabilities;
pub use crate::completion::{CompletionError, CompletionHandle};
pub use crate::config::VibratorConfig;
pub use crate::error::{ErrorKind, VibratorError, VibratorResult};
pub use crate::extended::ExtendedOperation;
pub use crate::mode::OperatingMode;
pub use crate::scheduler::{CompletionScheduler, ThreadScheduler, TimedTask};
pub use crate::service::{NodeReport, Vibrator};

pub use awhaptic_effects::{Effect, EffectDescriptor, EffectTable, Strength};
pub use awhaptic_registers::{MemoryRegisterPort, Node, RegisterPort, SysfsRegisterPort};
