//! Extended operations this vibrator does not implement.
//!
//! They form a closed set of tags dispatched through one entry point,
//! [`Vibrator::invoke_extended`](crate::Vibrator::invoke_extended), which
//! always answers `UnsupportedOperation`.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VibratorError;

/// Tag of an extended vibrator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtendedOperation {
    /// Hand control to an external source.
    SetExternalControl,
    /// Longest delay allowed between composed primitives.
    GetCompositionDelayMax,
    /// Largest composition accepted.
    GetCompositionSizeMax,
    /// Primitives available for composition.
    GetSupportedPrimitives,
    /// Duration of one primitive.
    GetPrimitiveDuration,
    /// Play a primitive composition.
    Compose,
    /// Effects usable as always-on.
    GetSupportedAlwaysOnEffects,
    /// Enable an always-on effect.
    AlwaysOnEnable,
    /// Disable an always-on effect.
    AlwaysOnDisable,
    /// Resonant frequency of the actuator.
    GetResonantFrequency,
    /// Q factor of the actuator.
    GetQFactor,
    /// Frequency step size.
    GetFrequencyResolution,
    /// Lowest drivable frequency.
    GetFrequencyMinimum,
    /// Amplitude limits per frequency band.
    GetBandwidthAmplitudeMap,
    /// Longest PWLE primitive.
    GetPwlePrimitiveDurationMax,
    /// Largest PWLE composition.
    GetPwleCompositionSizeMax,
    /// Supported braking modes.
    GetSupportedBraking,
    /// Play a PWLE composition.
    ComposePwle,
}

impl ExtendedOperation {
    /// Every extended operation.
    pub const ALL: [ExtendedOperation; 18] = [
        ExtendedOperation::SetExternalControl,
        ExtendedOperation::GetCompositionDelayMax,
        ExtendedOperation::GetCompositionSizeMax,
        ExtendedOperation::GetSupportedPrimitives,
        ExtendedOperation::GetPrimitiveDuration,
        ExtendedOperation::Compose,
        ExtendedOperation::GetSupportedAlwaysOnEffects,
        ExtendedOperation::AlwaysOnEnable,
        ExtendedOperation::AlwaysOnDisable,
        ExtendedOperation::GetResonantFrequency,
        ExtendedOperation::GetQFactor,
        ExtendedOperation::GetFrequencyResolution,
        ExtendedOperation::GetFrequencyMinimum,
        ExtendedOperation::GetBandwidthAmplitudeMap,
        ExtendedOperation::GetPwlePrimitiveDurationMax,
        ExtendedOperation::GetPwleCompositionSizeMax,
        ExtendedOperation::GetSupportedBraking,
        ExtendedOperation::ComposePwle,
    ];

    /// `snake_case` name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ExtendedOperation::SetExternalControl => "set_external_control",
            ExtendedOperation::GetCompositionDelayMax => "get_composition_delay_max",
            ExtendedOperation::GetCompositionSizeMax => "get_composition_size_max",
            ExtendedOperation::GetSupportedPrimitives => "get_supported_primitives",
            ExtendedOperation::GetPrimitiveDuration => "get_primitive_duration",
            ExtendedOperation::Compose => "compose",
            ExtendedOperation::GetSupportedAlwaysOnEffects => "get_supported_always_on_effects",
            ExtendedOperation::AlwaysOnEnable => "always_on_enable",
            ExtendedOperation::AlwaysOnDisable => "always_on_disable",
            ExtendedOperation::GetResonantFrequency => "get_resonant_frequency",
            ExtendedOperation::GetQFactor => "get_q_factor",
            ExtendedOperation::GetFrequencyResolution => "get_frequency_resolution",
            ExtendedOperation::GetFrequencyMinimum => "get_frequency_minimum",
            ExtendedOperation::GetBandwidthAmplitudeMap => "get_bandwidth_amplitude_map",
            ExtendedOperation::GetPwlePrimitiveDurationMax => "get_pwle_primitive_duration_max",
            ExtendedOperation::GetPwleCompositionSizeMax => "get_pwle_composition_size_max",
            ExtendedOperation::GetSupportedBraking => "get_supported_braking",
            ExtendedOperation::ComposePwle => "compose_pwle",
        }
    }
}

impl fmt::Display for ExtendedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtendedOperation {
    type Err = VibratorError;

    /// Accepts `snake_case`, `kebab-case` and upper-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ExtendedOperation::ALL
            .into_iter()
            .find(|op| op.name() == normalized)
            .ok_or_else(|| VibratorError::illegal_argument(format!("unknown operation '{s}'")))
    }
}
