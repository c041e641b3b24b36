//! Shared helpers for the integration tests.
#![allow(dead_code)]

use imdiff::{Patch, PatchOp};
use imdiff_types::parse_pointer;
use serde_json::Value;
use tracing_subscriber::filter::LevelFilter;

/// Install a subscriber that writes through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}

/// Apply `patch` to `doc`, operation by operation.
pub fn apply(mut doc: Value, patch: &Patch) -> Result<Value, String> {
    for op in patch {
        apply_op(&mut doc, op)?;
    }
    Ok(doc)
}

fn apply_op(doc: &mut Value, op: &PatchOp) -> Result<(), String> {
    let mut segments = parse_pointer(op.path()).map_err(|e| e.to_string())?;
    let Some(last) = segments.pop() else {
        *doc = op.value().cloned().unwrap_or(Value::Null);
        return Ok(());
    };

    let mut parent = &mut *doc;
    for segment in &segments {
        parent = match parent {
            Value::Object(map) => map.get_mut(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
            _ => None,
        }
        .ok_or_else(|| format!("{}: no parent at {segment:?}", op.path()))?;
    }

    match (parent, op) {
        (Value::Object(map), PatchOp::Add { value, .. } | PatchOp::Replace { value, .. }) => {
            map.insert(last, value.clone());
        }
        (Value::Object(map), PatchOp::Remove { .. }) => {
            map.remove(&last)
                .ok_or_else(|| format!("{}: missing key", op.path()))?;
        }
        (Value::Array(items), op) => {
            let index: usize = last
                .parse()
                .map_err(|_| format!("{}: bad index", op.path()))?;
            match op {
                PatchOp::Add { value, .. } if index <= items.len() => items.insert(index, value.clone()),
                PatchOp::Remove { .. } if index < items.len() => {
                    items.remove(index);
                }
                PatchOp::Replace { value, .. } if index < items.len() => items[index] = value.clone(),
                _ => return Err(format!("{}: index out of bounds", op.path())),
            }
        }
        _ => return Err(format!("{}: parent is not a container", op.path())),
    }
    Ok(())
}
