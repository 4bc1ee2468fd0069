// ── Variable publishing ──
//
// Changed state leaves are published as a flat name→value map under
// fixed external names. The sink is a trait so presentation layers can
// receive deltas however they like; `ChannelPublisher` adapts it to a
// tokio channel for CLI-style consumers.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tokio::sync::mpsc;

/// One published variable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for VariableValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for VariableValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for VariableValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for VariableValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

/// A flat map of changed variables, keyed by stable external name.
pub type VariableChanges = BTreeMap<String, VariableValue>;

/// Sink for published variable deltas.
///
/// The session never calls this with an empty map.
pub trait VariablePublisher: Send + Sync {
    fn publish(&self, changes: VariableChanges);
}

/// Publisher that forwards every delta into an unbounded channel.
pub struct ChannelPublisher {
    tx: mpsc::UnboundedSender<VariableChanges>,
}

impl ChannelPublisher {
    /// Create a publisher and the receiving end for its deltas.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<VariableChanges>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl VariablePublisher for ChannelPublisher {
    fn publish(&self, changes: VariableChanges) {
        // Receiver gone means nobody is watching; drop silently.
        let _ = self.tx.send(changes);
    }
}

/// Publisher that discards every delta (headless / test use).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPublisher;

impl VariablePublisher for NoopPublisher {
    fn publish(&self, _changes: VariableChanges) {}
}
