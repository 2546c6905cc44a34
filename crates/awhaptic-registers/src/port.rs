//! Register port trait definition.

use crate::error::RegisterResult;
use crate::node::Node;

/// Access to the driver's control nodes.
///
/// Implementations must be shareable across threads; the dispatch engine
/// only ever calls them from the command thread, but completion tasks
/// may hold a reference for diagnostics.
///
/// # Failure semantics
///
/// - Writes fail fast and are never retried here.
/// - `read_int` never fails; it returns `fallback` when the node is absent
///   or its content does not parse.
pub trait RegisterPort: Send + Sync {
    /// Write an integer value to a node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not present or the write is rejected.
    fn write_int(&self, node: Node, value: i32) -> RegisterResult<()>;

    /// Write a raw string value to a node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not present or the write is rejected.
    fn write_str(&self, node: Node, value: &str) -> RegisterResult<()>;

    /// Read an integer value from a node, or `fallback` if it cannot be read.
    fn read_int(&self, node: Node, fallback: i32) -> i32;

    /// Whether the node is present.
    fn exists(&self, node: Node) -> bool;
}

impl<P: RegisterPort + ?Sized> RegisterPort for Box<P> {
    fn write_int(&self, node: Node, value: i32) -> RegisterResult<()> {
        (**self).write_int(node, value)
    }

    fn write_str(&self, node: Node, value: &str) -> RegisterResult<()> {
        (**self).write_str(node, value)
    }

    fn read_int(&self, node: Node, fallback: i32) -> i32 {
        (**self).read_int(node, fallback)
    }

    fn exists(&self, node: Node) -> bool {
        (**self).exists(node)
    }
}
