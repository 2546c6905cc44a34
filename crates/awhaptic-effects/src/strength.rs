//! Effect strength tiers and amplitude banding.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{LIGHT_AMPLITUDE_MAX, MEDIUM_AMPLITUDE_MAX, STRONG_AMPLITUDE_MAX};
use crate::error::EffectError;

/// Coarse intensity tier of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum Strength {
    /// Weakest tier.
    Light = 0,
    /// Middle tier.
    Medium = 1,
    /// Strongest tier.
    Strong = 2,
}

impl Strength {
    /// Every strength, weakest first.
    pub const ALL: [Strength; 3] = [Strength::Light, Strength::Medium, Strength::Strong];

    /// Platform ordinal.
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Strength::Light => "LIGHT",
            Strength::Medium => "MEDIUM",
            Strength::Strong => "STRONG",
        }
    }

    /// Resolve a continuous amplitude onto a strength band.
    ///
    /// Bands are `(0, 0.33]` LIGHT, `(0.33, 0.66]` MEDIUM and `(0.66, 1.0]`
    /// STRONG. Anything else, NaN included, has no band.
    ///
    /// ```
    /// use awhaptic_effects::Strength;
    ///
    /// assert_eq!(Strength::from_amplitude(0.33), Some(Strength::Light));
    /// assert_eq!(Strength::from_amplitude(0.34), Some(Strength::Medium));
    /// assert_eq!(Strength::from_amplitude(0.0), None);
    /// ```
    pub fn from_amplitude(amplitude: f32) -> Option<Strength> {
        if amplitude > 0.0 && amplitude <= LIGHT_AMPLITUDE_MAX {
            Some(Strength::Light)
        } else if amplitude > LIGHT_AMPLITUDE_MAX && amplitude <= MEDIUM_AMPLITUDE_MAX {
            Some(Strength::Medium)
        } else if amplitude > MEDIUM_AMPLITUDE_MAX && amplitude <= STRONG_AMPLITUDE_MAX {
            Some(Strength::Strong)
        } else {
            None
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Strength {
    type Error = EffectError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Strength::ALL
            .into_iter()
            .find(|s| s.ordinal() == value)
            .ok_or_else(|| EffectError::unknown_ordinal("strength", value))
    }
}

impl FromStr for Strength {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Strength::ALL
            .into_iter()
            .find(|strength| strength.name() == normalized)
            .ok_or_else(|| EffectError::unknown_name("strength", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(Strength::from_amplitude(0.01), Some(Strength::Light));
        assert_eq!(Strength::from_amplitude(0.33), Some(Strength::Light));
        assert_eq!(Strength::from_amplitude(0.34), Some(Strength::Medium));
        assert_eq!(Strength::from_amplitude(0.66), Some(Strength::Medium));
        assert_eq!(Strength::from_amplitude(0.67), Some(Strength::Strong));
        assert_eq!(Strength::from_amplitude(1.0), Some(Strength::Strong));
    }

    #[test]
    fn test_out_of_band() {
        assert_eq!(Strength::from_amplitude(0.0), None);
        assert_eq!(Strength::from_amplitude(-0.5), None);
        assert_eq!(Strength::from_amplitude(1.01), None);
        assert_eq!(Strength::from_amplitude(f32::NAN), None);
        assert_eq!(Strength::from_amplitude(f32::INFINITY), None);
    }

    #[test]
    fn test_parse_and_ordinal() {
        assert_eq!("medium".parse(), Ok(Strength::Medium));
        assert_eq!("STRONG".parse(), Ok(Strength::Strong));
        assert!(matches!(
            "loud".parse::<Strength>(),
            Err(EffectError::UnknownName { .. })
        ));
        assert_eq!(Strength::try_from(0), Ok(Strength::Light));
        assert!(matches!(
            Strength::try_from(3),
            Err(EffectError::UnknownOrdinal { value: 3, .. })
        ));
    }
}
