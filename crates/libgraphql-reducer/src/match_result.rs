use crate::NodeKind;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;

/// An insertion-ordered named record (field name -> value).
pub type Record = IndexMap<String, MatchResult>;

/// The universal value passed between reducers.
///
/// Every reducer consumes the `MatchResult`s of a rule's sub-matches and
/// produces one `MatchResult` for its parent. The produced document is itself
/// a tree of `MatchResult`s, so it serializes directly to a JSON-like format.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchResult {
    /// No contribution. The parent never sees an entry for this position.
    Absent,

    /// A literal: string, number, boolean, null, variable or enum name.
    Scalar(Scalar),

    /// An ordered sequence of sibling results (grammar order).
    Sequence(Vec<MatchResult>),

    /// A named record whose children have already been folded into
    /// key/value pairs.
    Record(Record),

    /// A named record tagged with the kind of node it represents
    /// (definitions and selections).
    Node(Node),
}

impl MatchResult {
    /// Creates a `Scalar::String` result.
    pub fn string(value: impl Into<String>) -> Self {
        MatchResult::Scalar(Scalar::String(value.into()))
    }

    /// Creates a single-entry `Record` result.
    pub fn record(key: impl Into<String>, value: MatchResult) -> Self {
        let mut record = Record::with_capacity(1);
        record.insert(key.into(), value);
        MatchResult::Record(record)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, MatchResult::Absent)
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, MatchResult::Sequence(_))
    }

    /// Returns the text of a `Scalar::String` result.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MatchResult::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            MatchResult::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[MatchResult]> {
        match self {
            MatchResult::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            MatchResult::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            MatchResult::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Looks up `key` in a `Record`, or in the record carried by a `Node`.
    pub fn get(&self, key: &str) -> Option<&MatchResult> {
        match self {
            MatchResult::Record(record) => record.get(key),
            MatchResult::Node(node) => node.get(key),
            _ => None,
        }
    }
}

/// A literal value produced by a token reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Boolean(bool),
    /// An enum literal (`RED`). Serializes as `{"enum": "RED"}`.
    Enum(String),
    Float(f64),
    Int(i64),
    Null,
    String(String),
    /// A variable reference (`$RED`). Serializes as `{"variable": "RED"}`.
    Variable(String),
}

/// A record tagged with the kind of definition or selection it holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub node: Record,
}

impl Node {
    pub fn new(kind: NodeKind, node: Record) -> Self {
        Self { kind, node }
    }

    pub fn get(&self, key: &str) -> Option<&MatchResult> {
        self.node.get(key)
    }

    /// The `name` entry, when it holds a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(MatchResult::as_str)
    }
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MatchResult::Absent => serializer.serialize_none(),
            MatchResult::Scalar(scalar) => scalar.serialize(serializer),
            MatchResult::Sequence(items) => serializer.collect_seq(items),
            MatchResult::Record(record) => serializer.collect_map(record),
            MatchResult::Node(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Boolean(value) => serializer.serialize_bool(*value),
            Scalar::Float(value) => serializer.serialize_f64(*value),
            Scalar::Int(value) => serializer.serialize_i64(*value),
            Scalar::Null => serializer.serialize_unit(),
            Scalar::String(value) => serializer.serialize_str(value),
            Scalar::Enum(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("enum", name)?;
                map.end()
            },
            Scalar::Variable(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("variable", name)?;
                map.end()
            },
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("kind", self.kind.as_str())?;
        map.serialize_entry("node", &self.node)?;
        map.end()
    }
}
