//! Patch operations and the ordered patch returned by a diff.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kind of a [`PatchOp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
}

impl OpKind {
    /// The JSON Patch `op` name.
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single patch operation addressed by path.
///
/// Serializes in JSON Patch shape, e.g. `{"op":"add","path":"/a","value":1}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    /// Insert `value` at `path`.
    Add { path: String, value: Value },
    /// Delete whatever is at `path`.
    Remove { path: String },
    /// Overwrite whatever is at `path` with `value`.
    Replace { path: String, value: Value },
}

impl PatchOp {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        PatchOp::Add {
            path: path.into(),
            value,
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        PatchOp::Remove { path: path.into() }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        PatchOp::Replace {
            path: path.into(),
            value,
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            PatchOp::Add { .. } => OpKind::Add,
            PatchOp::Remove { .. } => OpKind::Remove,
            PatchOp::Replace { .. } => OpKind::Replace,
        }
    }

    /// The JSON Patch `op` name.
    pub fn op_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn path(&self) -> &str {
        match self {
            PatchOp::Add { path, .. } | PatchOp::Remove { path } | PatchOp::Replace { path, .. } => {
                path
            }
        }
    }

    /// The carried value; `None` for `remove`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            PatchOp::Add { value, .. } | PatchOp::Replace { value, .. } => Some(value),
            PatchOp::Remove { .. } => None,
        }
    }

    /// Render as a JSON Patch operation object.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("op".into(), Value::String(self.op_name().into()));
        obj.insert("path".into(), Value::String(self.path().into()));
        if let Some(value) = self.value() {
            obj.insert("value".into(), value.clone());
        }
        Value::Object(obj)
    }
}

/// The ordered list of operations that turns one tree into another.
///
/// Order is traversal order and is significant: operations are meant to be
/// applied one after another.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch {
    /// The operations, in application order.
    pub ops: Vec<PatchOp>,
}

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatchOp> {
        self.ops.iter()
    }

    pub fn into_ops(self) -> Vec<PatchOp> {
        self.ops
    }

    /// Number of `add` operations.
    pub fn additions(&self) -> usize {
        self.count(OpKind::Add)
    }

    /// Number of `remove` operations.
    pub fn removals(&self) -> usize {
        self.count(OpKind::Remove)
    }

    /// Number of `replace` operations.
    pub fn replacements(&self) -> usize {
        self.count(OpKind::Replace)
    }

    /// Render as a JSON Patch document (an array of operation objects).
    pub fn to_json(&self) -> Value {
        Value::Array(self.ops.iter().map(PatchOp::to_json).collect())
    }

    fn count(&self, kind: OpKind) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }
}

impl From<Vec<PatchOp>> for Patch {
    fn from(ops: Vec<PatchOp>) -> Self {
        Self { ops }
    }
}

impl FromIterator<PatchOp> for Patch {
    fn from_iter<I: IntoIterator<Item = PatchOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Patch {
    type Item = PatchOp;
    type IntoIter = std::vec::IntoIter<PatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Patch {
    type Item = &'a PatchOp;
    type IntoIter = std::slice::Iter<'a, PatchOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_in_json_patch_shape() {
        let op = PatchOp::add("/a", json!(1));
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"op": "add", "path": "/a", "value": 1})
        );
        let op = PatchOp::remove("/b/0");
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"op": "remove", "path": "/b/0"})
        );
    }

    #[test]
    fn to_json_agrees_with_serde() {
        let op = PatchOp::replace("", json!({"x": [1, 2]}));
        assert_eq!(op.to_json(), serde_json::to_value(&op).unwrap());
    }

    #[test]
    fn deserializes_from_json_patch() {
        let op: PatchOp =
            serde_json::from_value(json!({"op": "replace", "path": "/k", "value": null})).unwrap();
        assert_eq!(op, PatchOp::replace("/k", Value::Null));
        assert_eq!(op.kind(), OpKind::Replace);
        assert_eq!(op.value(), Some(&Value::Null));
    }

    #[test]
    fn patch_is_a_transparent_array() {
        let patch: Patch = vec![PatchOp::remove("/0"), PatchOp::add("/1", json!("x"))].into();
        let encoded = serde_json::to_value(&patch).unwrap();
        assert_eq!(encoded, patch.to_json());
        assert_eq!(
            encoded,
            json!([
                {"op": "remove", "path": "/0"},
                {"op": "add", "path": "/1", "value": "x"},
            ])
        );
        let decoded: Patch = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, patch);
    }

    #[test]
    fn patch_counts_by_kind() {
        let patch: Patch = [
            PatchOp::add("/a", json!(1)),
            PatchOp::add("/b", json!(2)),
            PatchOp::remove("/c"),
            PatchOp::replace("/d", json!(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(patch.len(), 4);
        assert_eq!(patch.additions(), 2);
        assert_eq!(patch.removals(), 1);
        assert_eq!(patch.replacements(), 1);
        assert_eq!(patch.iter().map(PatchOp::path).collect::<Vec<_>>(), ["/a", "/b", "/c", "/d"]);
    }
}
