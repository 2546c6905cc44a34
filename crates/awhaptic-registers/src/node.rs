//! Control node enumeration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A control point exposed by the haptic driver.
///
/// Each node is a single text file holding one integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Writing 1 triggers playback, 0 stops it.
    Activate,
    /// Operating mode ordinal for the next activation.
    ActivateMode,
    /// Waveform index into the driver's RAM table.
    Index,
    /// Loop repeat count for RAM-loop playback.
    Loop,
    /// Playback duration in milliseconds.
    Duration,
    /// Output gain, 0 to 128.
    Gain,
}

impl Node {
    /// Every node, in register-table order.
    pub const ALL: [Node; 6] = [
        Node::Activate,
        Node::ActivateMode,
        Node::Index,
        Node::Loop,
        Node::Duration,
        Node::Gain,
    ];

    /// File name of the node under the register root.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Node::Activate => "activate",
            Node::ActivateMode => "activate_mode",
            Node::Index => "index",
            Node::Loop => "loop",
            Node::Duration => "duration",
            Node::Gain => "gain",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
