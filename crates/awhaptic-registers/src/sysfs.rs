//! Sysfs-backed register port.
//!
//! Each node is a file under the configured root. Writes open the existing
//! file write-only and never create it: a missing node means the driver is
//! not loaded (or exposes a different interface), which is reported as
//! [`RegisterError::NotPresent`].

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::config::RegisterConfig;
use crate::error::{RegisterError, RegisterResult};
use crate::node::Node;
use crate::port::RegisterPort;

/// Register port writing to the driver's node files.
#[derive(Debug, Clone)]
pub struct SysfsRegisterPort {
    config: RegisterConfig,
}

impl SysfsRegisterPort {
    /// Create a port over the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: RegisterConfig) -> RegisterResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a port at the default root, honouring the environment override.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved configuration is invalid.
    pub fn from_env() -> RegisterResult<Self> {
        Self::new(RegisterConfig::from_env())
    }

    /// The configuration this port resolves nodes against.
    #[must_use]
    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }

    fn path(&self, node: Node) -> PathBuf {
        self.config.node_path(node)
    }
}

impl RegisterPort for SysfsRegisterPort {
    fn write_int(&self, node: Node, value: i32) -> RegisterResult<()> {
        self.write_str(node, &value.to_string())
    }

    fn write_str(&self, node: Node, value: &str) -> RegisterResult<()> {
        let path = self.path(node);
        trace!(node = %node, value, "register write");

        let mut file = match OpenOptions::new().write(true).truncate(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RegisterError::not_present(node, path));
            }
            Err(e) => return Err(RegisterError::io(node, path, e)),
        };

        // sysfs stores consume the whole buffer in one write(2)
        file.write_all(format!("{value}\n").as_bytes())
            .map_err(|e| RegisterError::io(node, &path, e))
    }

    fn read_int(&self, node: Node, fallback: i32) -> i32 {
        let path = self.path(node);
        match fs::read_to_string(&path) {
            Ok(content) => content.trim().parse().unwrap_or_else(|e| {
                debug!(node = %node, error = %e, "unparsable register content, using fallback");
                fallback
            }),
            Err(e) => {
                debug!(node = %node, error = %e, "register read failed, using fallback");
                fallback
            }
        }
    }

    fn exists(&self, node: Node) -> bool {
        self.path(node).exists()
    }
}
