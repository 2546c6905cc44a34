//! Error types for effect and table handling.

use thiserror::Error;

use crate::effect::Effect;
use crate::strength::Strength;

/// Errors raised while parsing identifiers or building a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectError {
    /// Name does not match any identifier of the given kind.
    #[error("Unknown {kind} name: '{name}'")]
    UnknownName {
        /// "effect" or "strength".
        kind: &'static str,
        /// Name that failed to parse.
        name: String,
    },

    /// Ordinal does not match any identifier of the given kind.
    #[error("Unknown {kind} ordinal: {value}")]
    UnknownOrdinal {
        /// "effect" or "strength".
        kind: &'static str,
        /// Ordinal that failed to convert.
        value: i32,
    },

    /// Gain value exceeds the driver's range.
    #[error("Gain {gain} for {strength} exceeds maximum {max}")]
    GainOutOfRange {
        /// Strength carrying the bad gain.
        strength: Strength,
        /// Offending gain.
        gain: u8,
        /// Largest accepted gain.
        max: u8,
    },

    /// Gains must increase strictly with strength.
    #[error("Gain for {higher} ({higher_gain}) must exceed gain for {lower} ({lower_gain})")]
    NonMonotonicGain {
        /// Weaker strength.
        lower: Strength,
        /// Its gain.
        lower_gain: u8,
        /// Stronger strength.
        higher: Strength,
        /// Its gain.
        higher_gain: u8,
    },

    /// The same effect was added twice.
    #[error("Effect {0} defined more than once")]
    DuplicateEffect(Effect),

    /// The same strength was added twice.
    #[error("Strength {0} defined more than once")]
    DuplicateStrength(Strength),
}

impl EffectError {
    /// Create an unknown-name error.
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        EffectError::UnknownName {
            kind,
            name: name.into(),
        }
    }

    /// Create an unknown-ordinal error.
    pub fn unknown_ordinal(kind: &'static str, value: i32) -> Self {
        EffectError::UnknownOrdinal { kind, value }
    }
}

/// A specialized `Result` type for effect operations.
pub type EffectResult<T> = std::result::Result<T, EffectError>;
