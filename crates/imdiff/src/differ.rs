//! Top-level dispatch: classify two roots and route them to the right differ.

use imdiff_types::{Patch, PatchOp, TreeKind};
use serde_json::Value;
use tracing::trace;

use crate::error::DiffResult;
use crate::map_diff::{map_diff, Keyed};
use crate::options::{DiffOptions, SequenceStrategy};
use crate::sequence_diff::sequence_diff;

/// Compute the patch turning `a` into `b`.
///
/// - Equal inputs yield an empty patch.
/// - If exactly one side is `null` the result is a single root `replace`.
/// - Two maps or two sequences are diffed recursively.
/// - Anything else (two primitives, or a map against a sequence) is a root
///   `replace` when the values differ.
///
/// Recursion follows the depth of the trees, so extremely deep inputs can
/// exhaust the thread's stack. Patch size and alignment cost are bounded by
/// [`DiffOptions::alignment_limit`], not depth.
pub fn diff(a: &Value, b: &Value, opts: &DiffOptions) -> Patch {
    diff_at(a, b, "", opts)
}

/// [`diff`] with default options apart from the sequence strategy.
pub fn diff_with(a: &Value, b: &Value, strategy: SequenceStrategy) -> Patch {
    diff(a, b, &DiffOptions::default().with_strategy(strategy))
}

/// [`diff`] rooted at `base_path`: every emitted path is prefixed with it.
///
/// `base_path` must already be an escaped path such as `"/doc/items"`.
pub fn diff_at(a: &Value, b: &Value, base_path: &str, opts: &DiffOptions) -> Patch {
    if a == b {
        return Patch::new();
    }

    let mut ops = Vec::new();
    if a.is_null() != b.is_null() {
        ops.push(PatchOp::replace(base_path, b.clone()));
    } else {
        match (a, b) {
            (Value::Array(a), Value::Array(b)) => sequence_diff(&mut ops, a, b, base_path, opts),
            (Value::Object(a), Value::Object(b)) => {
                map_diff(&mut ops, Keyed::Map(a), Keyed::Map(b), base_path, opts);
            }
            _ => {
                trace!(
                    old_kind = %TreeKind::of(a),
                    new_kind = %TreeKind::of(b),
                    "roots compared as primitives"
                );
                primitive_diff(&mut ops, a, b, base_path);
            }
        }
    }

    trace!(path = base_path, ops = ops.len(), "diff computed");
    Patch::from(ops)
}

fn primitive_diff(ops: &mut Vec<PatchOp>, a: &Value, b: &Value, path: &str) {
    if a != b {
        ops.push(PatchOp::replace(path, b.clone()));
    }
}

/// A reusable diff configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    /// Create a differ after validating `options`.
    pub fn new(options: DiffOptions) -> DiffResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn diff(&self, a: &Value, b: &Value) -> Patch {
        diff(a, b, &self.options)
    }

    pub fn diff_at(&self, a: &Value, b: &Value, base_path: &str) -> Patch {
        diff_at(a, b, base_path, &self.options)
    }
}
