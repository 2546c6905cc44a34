//! Gain and amplitude limits

/// Highest gain the driver accepts
pub const MAX_GAIN: u8 = 128;

/// Lowest gain the driver accepts
pub const MIN_GAIN: u8 = 0;

/// Upper bound (inclusive) of the amplitude band mapped to LIGHT
pub const LIGHT_AMPLITUDE_MAX: f32 = 0.33;

/// Upper bound (inclusive) of the amplitude band mapped to MEDIUM
pub const MEDIUM_AMPLITUDE_MAX: f32 = 0.66;

/// Upper bound (inclusive) of the amplitude band mapped to STRONG
pub const STRONG_AMPLITUDE_MAX: f32 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(MIN_GAIN < MAX_GAIN);
        assert!(LIGHT_AMPLITUDE_MAX < MEDIUM_AMPLITUDE_MAX);
        assert!(MEDIUM_AMPLITUDE_MAX < STRONG_AMPLITUDE_MAX);
    }
}
