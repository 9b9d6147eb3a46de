//! Node classification for structural traversal.
//!
//! Every JSON node is classified exactly once per visit into a closed set of
//! kinds. The comparator branches on this tag only.

use serde_json::Value;
use std::fmt;

/// Primitive subtypes. Two primitives of different subtypes are a
/// structural divergence, not a value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Null,
    Bool,
    Number,
    String,
}

/// Runtime shape of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Leaf value with no further structure
    Primitive(PrimitiveKind),

    /// Ordered, variable-length container (JSON array)
    Sequence,

    /// Named fields (JSON object)
    Mapping,
}

impl NodeKind {
    /// Classify a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => NodeKind::Primitive(PrimitiveKind::Null),
            Value::Bool(_) => NodeKind::Primitive(PrimitiveKind::Bool),
            Value::Number(_) => NodeKind::Primitive(PrimitiveKind::Number),
            Value::String(_) => NodeKind::Primitive(PrimitiveKind::String),
            Value::Array(_) => NodeKind::Sequence,
            Value::Object(_) => NodeKind::Mapping,
        }
    }

    pub fn is_primitive(self) -> bool {
        matches!(self, NodeKind::Primitive(_))
    }

    /// Short lowercase name used in reports and shape signatures
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Primitive(PrimitiveKind::Null) => "null",
            NodeKind::Primitive(PrimitiveKind::Bool) => "boolean",
            NodeKind::Primitive(PrimitiveKind::Number) => "number",
            NodeKind::Primitive(PrimitiveKind::String) => "string",
            NodeKind::Sequence => "array",
            NodeKind::Mapping => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
