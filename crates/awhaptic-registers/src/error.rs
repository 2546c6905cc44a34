//! Error types for register access.

use std::path::PathBuf;

use thiserror::Error;

use crate::node::Node;

/// Errors that can occur while accessing a control node.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The node file does not exist under the configured root.
    #[error("Register node '{node}' not present at {}", path.display())]
    NotPresent {
        /// Node that was addressed.
        node: Node,
        /// Resolved path of the node file.
        path: PathBuf,
    },

    /// The node exists but the write was rejected.
    #[error("Write to register node '{node}' at {} failed: {source}", path.display())]
    Io {
        /// Node that was addressed.
        node: Node,
        /// Resolved path of the node file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The register configuration is unusable.
    #[error("Invalid register configuration: {0}")]
    InvalidConfiguration(String),
}

impl RegisterError {
    /// Create a not-present error.
    #[must_use]
    pub fn not_present(node: Node, path: impl Into<PathBuf>) -> Self {
        Self::NotPresent {
            node,
            path: path.into(),
        }
    }

    /// Create an I/O error for a node write.
    #[must_use]
    pub fn io(node: Node, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            node,
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// The node this error refers to, if any.
    #[must_use]
    pub fn node(&self) -> Option<Node> {
        match self {
            Self::NotPresent { node, .. } | Self::Io { node, .. } => Some(*node),
            Self::InvalidConfiguration(_) => None,
        }
    }
}

/// A specialized `Result` type for register operations.
pub type RegisterResult<T> = std::result::Result<T, RegisterError>;
