// Capability document parsing and search
//
// Cameras report which optional features, modes, and ranges the connected
// model supports as an arbitrarily nested JSON document whose leaves are
// tagged `{Type: "enum"|"range", Description, Data}` descriptors. The wire
// JSON is converted once into an owned tree; lookups then walk the tree by
// name instead of re-interpreting raw untyped nodes on every call.

use std::collections::BTreeMap;

use serde_json::Value;

/// Recursion cap for the depth-first search. `serde_json::Value` cannot
/// contain reference cycles, but aliased/repeated substructure can nest
/// far deeper than any real capability document; the cap terminates the
/// walk cleanly instead of overflowing the stack.
const MAX_DEPTH: usize = 64;

/// Canonical f-stop labels used to filter iris enum descriptors down to
/// the values the presentation layer knows how to display.
pub const F_STOP_LABELS: &[&str] = &[
    "Close", "F11", "F9.6", "F8.0", "F6.8", "F5.6", "F4.8", "F4.0", "F3.4", "F2.8", "F2.4",
    "F2.0", "F1.8", "F1.6",
];

/// One entry of an enum descriptor: numeric wire value and display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumOption {
    pub value: i64,
    pub label: String,
}

/// A node of the converted capability document.
#[derive(Debug, Clone, PartialEq)]
pub enum CapabilityNode {
    /// `{Type: "enum", Description, Data: [{Value, Description}]}`
    Enum {
        description: String,
        options: Vec<EnumOption>,
    },
    /// `{Type: "range", Description, Data: {Min, Max}}`
    Range {
        description: String,
        min: i64,
        max: i64,
    },
    /// Plain JSON object without a descriptor tag.
    Branch(BTreeMap<String, CapabilityNode>),
    /// JSON array, searched element-wise.
    List(Vec<CapabilityNode>),
    /// Untyped scalar leaf (firmware strings, counts, flags).
    Scalar(Value),
}

impl CapabilityNode {
    /// Convert wire JSON into an owned capability tree.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                match map.get("Type").and_then(Value::as_str) {
                    Some("enum") => {
                        let options = map
                            .get("Data")
                            .and_then(Value::as_array)
                            .map(|entries| {
                                entries
                                    .iter()
                                    .filter_map(|e| {
                                        Some(EnumOption {
                                            value: e.get("Value")?.as_i64()?,
                                            label: e
                                                .get("Description")?
                                                .as_str()?
                                                .to_owned(),
                                        })
                                    })
                                    .collect()
                            })
                            .unwrap_or_default();
                        return Self::Enum {
                            description: descriptor_name(map),
                            options,
                        };
                    }
                    Some("range") => {
                        let data = map.get("Data");
                        let bound = |key: &str| {
                            data.and_then(|d| d.get(key)).and_then(Value::as_i64)
                        };
                        return Self::Range {
                            description: descriptor_name(map),
                            min: bound("Min").unwrap_or(0),
                            max: bound("Max").unwrap_or(0),
                        };
                    }
                    _ => {}
                }
                Self::Branch(
                    map.iter()
                        .map(|(k, v)| (k.clone(), Self::from_value(v)))
                        .collect(),
                )
            }
            Value::Array(items) => Self::List(items.iter().map(Self::from_value).collect()),
            other => Self::Scalar(other.clone()),
        }
    }

    /// Whether this node is a typed `enum`/`range` descriptor.
    pub fn is_descriptor(&self) -> bool {
        matches!(self, Self::Enum { .. } | Self::Range { .. })
    }

    /// The descriptor's `Description`, if this is a typed leaf.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum { description, .. } | Self::Range { description, .. } => {
                Some(description)
            }
            _ => None,
        }
    }

    /// Depth-first search for the first typed descriptor named `name`.
    ///
    /// Objects are searched by direct key match first, then exhaustively
    /// by nested recursion; arrays element-wise. A descriptor matches when
    /// its `Description` equals `name`, or when it sits under a key equal
    /// to `name`. Absence is a normal result -- many models simply lack a
    /// given control.
    pub fn find(&self, name: &str) -> Option<&Self> {
        self.find_at(name, 0)
    }

    fn find_at(&self, name: &str, depth: usize) -> Option<&Self> {
        if depth >= MAX_DEPTH {
            return None;
        }
        match self {
            Self::Enum { .. } | Self::Range { .. } => {
                (self.description() == Some(name)).then_some(self)
            }
            Self::Branch(children) => {
                if let Some(child) = children.get(name) {
                    if child.is_descriptor() {
                        return Some(child);
                    }
                }
                children
                    .values()
                    .find_map(|child| child.find_at(name, depth + 1))
            }
            Self::List(items) => items.iter().find_map(|item| item.find_at(name, depth + 1)),
            Self::Scalar(_) => None,
        }
    }

    /// Numeric-value→label map for an enum descriptor, optionally filtered
    /// to a canonical label set (e.g. [`F_STOP_LABELS`] for iris).
    pub fn enum_options(&self, filter: Option<&[&str]>) -> Option<BTreeMap<i64, String>> {
        let Self::Enum { options, .. } = self else {
            return None;
        };
        Some(
            options
                .iter()
                .filter(|opt| filter.is_none_or(|allow| allow.contains(&opt.label.as_str())))
                .map(|opt| (opt.value, opt.label.clone()))
                .collect(),
        )
    }

    /// `(min, max)` bounds for a range descriptor.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match self {
            Self::Range { min, max, .. } => Some((*min, *max)),
            _ => None,
        }
    }

    /// Linearize a range descriptor into a synthetic enumerated map with
    /// at most `steps` evenly spaced entries (always including both
    /// bounds), for UIs that need discrete choices.
    pub fn linearize(&self, steps: usize) -> Option<BTreeMap<i64, String>> {
        let (min, max) = self.bounds()?;
        if steps < 2 || min >= max {
            return Some(BTreeMap::from([(min, min.to_string())]));
        }
        let span = max - min;
        let gaps = i64::try_from(steps - 1).ok()?;
        let step = (span / gaps).max(1);
        let mut map: BTreeMap<i64, String> = (0..gaps)
            .map(|i| min + i * step)
            .take_while(|v| *v < max)
            .map(|v| (v, v.to_string()))
            .collect();
        map.insert(max, max.to_string());
        Some(map)
    }
}

/// Descriptors carry their name in `Description`.
fn descriptor_name(map: &serde_json::Map<String, Value>) -> String {
    map.get("Description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

// ── Ability set ──────────────────────────────────────────────────────

/// The converted capability document for one connected camera.
///
/// A model "has capability X" iff a typed descriptor named X exists
/// anywhere in the document; that boolean gates which optional controls
/// and state subsystems the rest of the system activates.
#[derive(Debug, Clone)]
pub struct AbilitySet {
    root: CapabilityNode,
}

impl AbilitySet {
    pub fn from_value(doc: &Value) -> Self {
        Self {
            root: CapabilityNode::from_value(doc),
        }
    }

    /// An ability set that reports no capabilities.
    pub fn empty() -> Self {
        Self {
            root: CapabilityNode::Branch(BTreeMap::new()),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.root.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&CapabilityNode> {
        self.root.find(name)
    }

    /// Value→label map for a named enum capability.
    pub fn enum_options(
        &self,
        name: &str,
        filter: Option<&[&str]>,
    ) -> Option<BTreeMap<i64, String>> {
        self.find(name)?.enum_options(filter)
    }

    /// `(min, max)` for a named range capability.
    pub fn range(&self, name: &str) -> Option<(i64, i64)> {
        self.find(name)?.bounds()
    }
}
