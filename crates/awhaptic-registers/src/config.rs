//! Register location configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RegisterError, RegisterResult};
use crate::node::Node;

/// Default directory holding the driver's control nodes.
pub const DEFAULT_REGISTER_ROOT: &str = "/sys/class/leds/vibrator";

/// Environment variable that overrides the register root.
pub const REGISTER_ROOT_ENV: &str = "AWHAPTIC_SYSFS_ROOT";

/// Where the control node files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Directory containing one file per [`Node`].
    pub root: PathBuf,
}

impl RegisterConfig {
    /// Create a configuration rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default configuration with the [`REGISTER_ROOT_ENV`] override applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_override()
    }

    /// Replace the root with [`REGISTER_ROOT_ENV`] when it is set and non-empty.
    #[must_use]
    pub fn with_env_override(self) -> Self {
        match std::env::var_os(REGISTER_ROOT_ENV) {
            Some(root) if !root.is_empty() => Self { root: root.into() },
            _ => self,
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is empty.
    pub fn validate(&self) -> RegisterResult<()> {
        if self.root.as_os_str().is_empty() {
            return Err(RegisterError::invalid_configuration(
                "root must not be empty",
            ));
        }
        Ok(())
    }

    /// The register root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a node file.
    #[must_use]
    pub fn node_path(&self, node: Node) -> PathBuf {
        self.root.join(node.file_name())
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_REGISTER_ROOT),
        }
    }
}
