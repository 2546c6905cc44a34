//! Capability bitmask.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Set of platform capability bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(u32);

impl Capabilities {
    /// No capability.
    pub const NONE: Capabilities = Capabilities(0);
    /// Completion callbacks for `on`.
    pub const ON_CALLBACK: Capabilities = Capabilities(1);
    /// Completion callbacks for `perform`.
    pub const PERFORM_CALLBACK: Capabilities = Capabilities(2);
    /// Amplitude can be changed.
    pub const AMPLITUDE_CONTROL: Capabilities = Capabilities(4);
    /// External control passthrough.
    pub const EXTERNAL_CONTROL: Capabilities = Capabilities(8);
    /// Amplitude control while under external control.
    pub const EXTERNAL_AMPLITUDE_CONTROL: Capabilities = Capabilities(16);
    /// Primitive composition.
    pub const COMPOSE_EFFECTS: Capabilities = Capabilities(32);
    /// Always-on effects.
    pub const ALWAYS_ON_CONTROL: Capabilities = Capabilities(64);
    /// Resonant frequency query.
    pub const GET_RESONANT_FREQUENCY: Capabilities = Capabilities(128);
    /// Q factor query.
    pub const GET_Q_FACTOR: Capabilities = Capabilities(256);
    /// Frequency control.
    pub const FREQUENCY_CONTROL: Capabilities = Capabilities(512);
    /// PWLE composition.
    pub const COMPOSE_PWLE_EFFECTS: Capabilities = Capabilities(1024);

    /// What this vibrator advertises.
    pub const DEVICE: Capabilities = Capabilities(
        Self::ON_CALLBACK.0 | Self::PERFORM_CALLBACK.0 | Self::AMPLITUDE_CONTROL.0,
    );

    const NAMED: [(Capabilities, &'static str); 11] = [
        (Self::ON_CALLBACK, "ON_CALLBACK"),
        (Self::PERFORM_CALLBACK, "PERFORM_CALLBACK"),
        (Self::AMPLITUDE_CONTROL, "AMPLITUDE_CONTROL"),
        (Self::EXTERNAL_CONTROL, "EXTERNAL_CONTROL"),
        (Self::EXTERNAL_AMPLITUDE_CONTROL, "EXTERNAL_AMPLITUDE_CONTROL"),
        (Self::COMPOSE_EFFECTS, "COMPOSE_EFFECTS"),
        (Self::ALWAYS_ON_CONTROL, "ALWAYS_ON_CONTROL"),
        (Self::GET_RESONANT_FREQUENCY, "GET_RESONANT_FREQUENCY"),
        (Self::GET_Q_FACTOR, "GET_Q_FACTOR"),
        (Self::FREQUENCY_CONTROL, "FREQUENCY_CONTROL"),
        (Self::COMPOSE_PWLE_EFFECTS, "COMPOSE_PWLE_EFFECTS"),
    ];

    /// Wrap raw bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Capabilities(bits)
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    /// Names of the known bits that are set, lowest bit first.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(cap, _)| self.contains(*cap))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Capabilities) -> Capabilities {
        Capabilities(self.0 | rhs.0)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Capabilities) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)?;
        let names = self.names();
        if !names.is_empty() {
            write!(f, " ({})", names.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_bits() {
        assert_eq!(Capabilities::DEVICE.bits(), 7);
        assert_eq!(
            Capabilities::DEVICE,
            Capabilities::ON_CALLBACK
                | Capabilities::PERFORM_CALLBACK
                | Capabilities::AMPLITUDE_CONTROL
        );
    }

    #[test]
    fn test_device_lacks_extended_bits() {
        for cap in [
            Capabilities::EXTERNAL_CONTROL,
            Capabilities::COMPOSE_EFFECTS,
            Capabilities::ALWAYS_ON_CONTROL,
            Capabilities::GET_RESONANT_FREQUENCY,
            Capabilities::FREQUENCY_CONTROL,
            Capabilities::COMPOSE_PWLE_EFFECTS,
        ] {
            assert!(!Capabilities::DEVICE.contains(cap));
        }
    }

    #[test]
    fn test_display() {
        insta::assert_snapshot!(
            Capabilities::DEVICE.to_string(),
            @"0x7 (ON_CALLBACK | PERFORM_CALLBACK | AMPLITUDE_CONTROL)"
        );
        insta::assert_snapshot!(Capabilities::NONE.to_string(), @"0x0");
    }

    #[test]
    fn test_serializes_as_integer() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Capabilities::DEVICE)?, "7");
        Ok(())
    }
}
