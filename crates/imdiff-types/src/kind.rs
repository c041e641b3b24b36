use std::fmt;

use serde_json::Value;

/// The three node kinds a tree value can take.
///
/// Computed once per value with [`TreeKind::of`] so the differ can dispatch
/// on a closed tag instead of probing the value repeatedly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeKind {
    /// A keyed collection (`Value::Object`).
    Map,
    /// An index-addressed collection (`Value::Array`).
    Sequence,
    /// A string, number, boolean, or null.
    Primitive,
}

impl TreeKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Map,
            Value::Array(_) => Self::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Primitive,
        }
    }

    /// Returns `true` for [`TreeKind::Map`].
    pub fn is_map(self) -> bool {
        self == Self::Map
    }

    /// Returns `true` for [`TreeKind::Sequence`].
    pub fn is_sequence(self) -> bool {
        self == Self::Sequence
    }

    /// Returns `true` for [`TreeKind::Primitive`].
    pub fn is_primitive(self) -> bool {
        self == Self::Primitive
    }

    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Sequence => "sequence",
            Self::Primitive => "primitive",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
