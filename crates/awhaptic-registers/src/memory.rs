//! In-memory register port.
//!
//! Behaves like a sysfs node directory held in memory: nodes must exist to
//! be written, every accepted write is journaled with its timestamp, and
//! individual nodes can be made to reject writes.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::{RegisterError, RegisterResult};
use crate::node::Node;
use crate::port::RegisterPort;

/// One accepted register write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Node that was written.
    pub node: Node,
    /// Value as written.
    pub value: String,
    /// When the write was accepted.
    pub at: Instant,
}

impl RegisterWrite {
    /// The written value as an integer, if it is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        self.value.trim().parse().ok()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    values: BTreeMap<Node, String>,
    journal: Vec<RegisterWrite>,
    failing: BTreeSet<Node>,
}

/// Shared in-memory register file.
///
/// Clones share the same state, so a test can hand one clone to the
/// vibrator and inspect the journal through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegisterPort {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryRegisterPort {
    /// Create a port with no nodes present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a port with every [`Node`] present and holding `0`.
    #[must_use]
    pub fn with_all_nodes() -> Self {
        Self::with_nodes(&Node::ALL)
    }

    /// Create a port with only the given nodes present.
    #[must_use]
    pub fn with_nodes(nodes: &[Node]) -> Self {
        let port = Self::new();
        {
            let mut state = port.state.lock();
            for node in nodes {
                state.values.insert(*node, "0".to_string());
            }
        }
        port
    }

    /// Make a node disappear.
    pub fn remove_node(&self, node: Node) {
        self.state.lock().values.remove(&node);
    }

    /// Make every subsequent write to `node` fail.
    pub fn fail_node(&self, node: Node) {
        self.state.lock().failing.insert(node);
    }

    /// Stop injecting write failures.
    pub fn clear_failures(&self) {
        self.state.lock().failing.clear();
    }

    /// Current raw value of a node.
    #[must_use]
    pub fn value(&self, node: Node) -> Option<String> {
        self.state.lock().values.get(&node).cloned()
    }

    /// Every accepted write, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<RegisterWrite> {
        self.state.lock().journal.clone()
    }

    /// Every accepted write as `(node, integer value)`, skipping non-integer writes.
    #[must_use]
    pub fn int_writes(&self) -> Vec<(Node, i32)> {
        self.state
            .lock()
            .journal
            .iter()
            .filter_map(|w| w.as_int().map(|v| (w.node, v)))
            .collect()
    }

    /// Number of accepted writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state.lock().journal.len()
    }

    /// Forget the write journal, keeping node values.
    pub fn clear_journal(&self) {
        self.state.lock().journal.clear();
    }
}

impl RegisterPort for MemoryRegisterPort {
    fn write_int(&self, node: Node, value: i32) -> RegisterResult<()> {
        self.write_str(node, &value.to_string())
    }

    fn write_str(&self, node: Node, value: &str) -> RegisterResult<()> {
        let mut state = self.state.lock();
        let path = format!("memory://{node}");

        if state.failing.contains(&node) {
            return Err(RegisterError::io(
                node,
                path,
                io::Error::other("injected write failure"),
            ));
        }
        if !state.values.contains_key(&node) {
            return Err(RegisterError::not_present(node, path));
        }

        trace!(node = %node, value, "memory register write");
        state.values.insert(node, value.to_string());
        state.journal.push(RegisterWrite {
            node,
            value: value.to_string(),
            at: Instant::now(),
        });
        Ok(())
    }

    fn read_int(&self, node: Node, fallback: i32) -> i32 {
        self.state
            .lock()
            .values
            .get(&node)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(fallback)
    }

    fn exists(&self, node: Node) -> bool {
        self.state.lock().values.contains_key(&node)
    }
}
