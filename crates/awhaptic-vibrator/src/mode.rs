//! Hardware operating modes.

use core::fmt;

use awhaptic_effects::EffectDescriptor;
use serde::{Deserialize, Serialize};

/// Playback driver mode written to the `activate_mode` register.
///
/// Not persisted: every command re-derives and re-arms its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum OperatingMode {
    /// Idle.
    Standby = 0,
    /// One-shot playback of a RAM waveform.
    Ram = 1,
    /// Real-time playback streamed by the host.
    Rtp = 2,
    /// Playback started by a hardware trigger pin.
    Trigger = 3,
    /// Continuous drive for a fixed duration.
    Continuous = 4,
    /// Looped playback of a RAM waveform.
    RamLoop = 5,
}

impl OperatingMode {
    /// Value written to the `activate_mode` register.
    #[must_use]
    pub const fn register_value(self) -> i32 {
        self as i32
    }

    /// Whether the mode plays from the RAM waveform table, making the
    /// index and loop registers meaningful.
    #[must_use]
    pub const fn uses_waveform_table(self) -> bool {
        matches!(self, OperatingMode::Ram | OperatingMode::RamLoop)
    }

    /// Mode that plays the given effect: RAM-loop for looped effects, RAM otherwise.
    #[must_use]
    pub const fn for_descriptor(descriptor: &EffectDescriptor) -> Self {
        if descriptor.is_looped() {
            OperatingMode::RamLoop
        } else {
            OperatingMode::Ram
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperatingMode::Standby => "STANDBY",
            OperatingMode::Ram => "RAM",
            OperatingMode::Rtp => "RTP",
            OperatingMode::Trigger => "TRIGGER",
            OperatingMode::Continuous => "CONTINUOUS",
            OperatingMode::RamLoop => "RAM_LOOP",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_values() {
        assert_eq!(OperatingMode::Standby.register_value(), 0);
        assert_eq!(OperatingMode::Ram.register_value(), 1);
        assert_eq!(OperatingMode::Rtp.register_value(), 2);
        assert_eq!(OperatingMode::Trigger.register_value(), 3);
        assert_eq!(OperatingMode::Continuous.register_value(), 4);
        assert_eq!(OperatingMode::RamLoop.register_value(), 5);
    }

    #[test]
    fn test_mode_for_descriptor() {
        assert_eq!(
            OperatingMode::for_descriptor(&EffectDescriptor::new(3, 0)),
            OperatingMode::Ram
        );
        assert_eq!(
            OperatingMode::for_descriptor(&EffectDescriptor::new(4, 15)),
            OperatingMode::RamLoop
        );
    }

    #[test]
    fn test_waveform_table_modes() {
        assert!(OperatingMode::Ram.uses_waveform_table());
        assert!(OperatingMode::RamLoop.uses_waveform_table());
        assert!(!OperatingMode::Continuous.uses_waveform_table());
    }
}
