//! Vibrator configuration.

use std::path::Path;

use awhaptic_registers::RegisterConfig;
use serde::{Deserialize, Serialize};

use crate::error::{VibratorError, VibratorResult};

/// Default delay added to a `perform` completion, in milliseconds.
pub const DEFAULT_PERFORM_COMPLETION_MARGIN_MS: u32 = 10;

/// Largest accepted completion margin, in milliseconds.
pub const MAX_PERFORM_COMPLETION_MARGIN_MS: u32 = 1000;

/// Vibrator configuration.
///
/// The defaults reproduce the reference device's timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VibratorConfig {
    /// Where the control nodes live.
    pub registers: RegisterConfig,

    /// Added to an effect's nominal duration before its completion fires.
    ///
    /// Default: 10ms.
    pub perform_completion_margin_ms: u32,

    /// Re-trigger DOUBLE_CLICK after its nominal duration, inside the call.
    ///
    /// Default: true.
    pub double_click_second_pulse: bool,
}

impl VibratorConfig {
    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> VibratorConfigBuilder {
        VibratorConfigBuilder::default()
    }

    /// Load and validate a JSON configuration file.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VibratorError::InvalidConfiguration`] if the file cannot be
    /// read or parsed, or fails validation.
    pub fn from_json_file(path: impl AsRef<Path>) -> VibratorResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            VibratorError::invalid_configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: VibratorConfig = serde_json::from_str(&text).map_err(|e| {
            VibratorError::invalid_configuration(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the register root is empty or the completion
    /// margin exceeds [`MAX_PERFORM_COMPLETION_MARGIN_MS`].
    pub fn validate(&self) -> VibratorResult<()> {
        self.registers
            .validate()
            .map_err(|e| VibratorError::invalid_configuration(e.to_string()))?;
        if self.perform_completion_margin_ms > MAX_PERFORM_COMPLETION_MARGIN_MS {
            return Err(VibratorError::invalid_configuration(format!(
                "perform_completion_margin_ms must not exceed {MAX_PERFORM_COMPLETION_MARGIN_MS}"
            )));
        }
        Ok(())
    }
}

impl Default for VibratorConfig {
    fn default() -> Self {
        Self {
            registers: RegisterConfig::default(),
            perform_completion_margin_ms: DEFAULT_PERFORM_COMPLETION_MARGIN_MS,
            double_click_second_pulse: true,
        }
    }
}

/// Builder for [`VibratorConfig`].
#[derive(Debug, Default)]
pub struct VibratorConfigBuilder {
    config: VibratorConfig,
}

impl VibratorConfigBuilder {
    /// Set the register configuration.
    #[must_use]
    pub fn registers(mut self, registers: RegisterConfig) -> Self {
        self.config.registers = registers;
        self
    }

    /// Set the `perform` completion margin in milliseconds.
    #[must_use]
    pub fn perform_completion_margin_ms(mut self, ms: u32) -> Self {
        self.config.perform_completion_margin_ms = ms;
        self
    }

    /// Enable or disable the DOUBLE_CLICK second pulse.
    #[must_use]
    pub fn double_click_second_pulse(mut self, enabled: bool) -> Self {
        self.config.double_click_second_pulse = enabled;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> VibratorResult<VibratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
