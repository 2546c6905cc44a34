//! Per-command playback request.

use awhaptic_effects::EffectDescriptor;

use crate::mode::OperatingMode;

/// Activation timeout used when triggering RAM waveforms.
pub const RAM_ACTIVATION_TIMEOUT_MS: u32 = 1;

/// Everything the sequencer needs to program one playback.
///
/// Built per command and consumed immediately; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackRequest {
    /// Mode to arm.
    pub mode: OperatingMode,
    /// RAM waveform index.
    pub index: u8,
    /// Loop repeat count.
    pub loop_count: u8,
    /// Value for the duration register; `0` leaves it untouched.
    pub activation_timeout_ms: u32,
}

impl PlaybackRequest {
    /// Continuous drive for `timeout_ms`.
    #[must_use]
    pub const fn continuous(timeout_ms: u32) -> Self {
        Self {
            mode: OperatingMode::Continuous,
            index: 0,
            loop_count: 0,
            activation_timeout_ms: timeout_ms,
        }
    }

    /// RAM playback of a table effect.
    #[must_use]
    pub const fn from_descriptor(descriptor: &EffectDescriptor) -> Self {
        Self {
            mode: OperatingMode::for_descriptor(descriptor),
            index: descriptor.hardware_index,
            loop_count: descriptor.loop_count,
            activation_timeout_ms: RAM_ACTIVATION_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_descriptor() {
        let request = PlaybackRequest::from_descriptor(&EffectDescriptor::new(4, 15));
        assert_eq!(request.mode, OperatingMode::RamLoop);
        assert_eq!(request.index, 4);
        assert_eq!(request.loop_count, 15);
        assert_eq!(request.activation_timeout_ms, RAM_ACTIVATION_TIMEOUT_MS);
    }

    #[test]
    fn test_continuous() {
        let request = PlaybackRequest::continuous(250);
        assert_eq!(request.mode, OperatingMode::Continuous);
        assert_eq!(request.activation_timeout_ms, 250);
    }
}
