//! Sequence diff: strategy selection and LCS-based granular diff.

use imdiff_types::{child_path, PatchOp};
use serde_json::Value;
use tracing::{debug, trace};

use crate::lcs::{self, Align};
use crate::map_diff::{map_diff, Keyed};
use crate::options::{DiffOptions, SequenceStrategy};

/// Append the operations turning sequence `a` into sequence `b` to `ops`,
/// following the configured [`SequenceStrategy`].
pub(crate) fn sequence_diff(
    ops: &mut Vec<PatchOp>,
    a: &[Value],
    b: &[Value],
    path: &str,
    opts: &DiffOptions,
) {
    if a == b {
        return;
    }

    match &opts.strategy {
        SequenceStrategy::Granular => granular_sequence_diff(ops, a, b, path, opts),
        SequenceStrategy::ReplaceWhole => ops.push(replace_whole(path, b)),
        SequenceStrategy::GranularIfSameIdentity(field) => {
            if same_identity(a, b, field) {
                granular_sequence_diff(ops, a, b, path, opts);
            } else {
                debug!(path, field = %field, "element identities differ, replacing sequence");
                ops.push(replace_whole(path, b));
            }
        }
    }
}

fn replace_whole(path: &str, b: &[Value]) -> PatchOp {
    PatchOp::replace(path, Value::Array(b.to_vec()))
}

/// Whether `a` and `b` hold the same elements, identified by `field`, at
/// the same positions.
///
/// Both sides must be non-empty, of equal length, and made only of maps.
/// An element without the field matches another element without it.
fn same_identity(a: &[Value], b: &[Value], field: &str) -> bool {
    if a.len() != b.len() || a.is_empty() {
        return false;
    }
    a.iter().zip(b).all(|pair| match pair {
        (Value::Object(x), Value::Object(y)) => x.get(field) == y.get(field),
        _ => false,
    })
}

/// Align `a` with `b` and diff changed elements in place.
///
/// Paths address the sequence as it stands after the preceding operations
/// have been applied, so deletions do not advance the position.
pub(crate) fn granular_sequence_diff(
    ops: &mut Vec<PatchOp>,
    a: &[Value],
    b: &[Value],
    path: &str,
    opts: &DiffOptions,
) {
    if a == b {
        return;
    }

    if opts.exceeds_alignment_limit(a.len(), b.len()) {
        debug!(
            path,
            old_len = a.len(),
            new_len = b.len(),
            limit = opts.alignment_limit,
            "alignment limit reached, diffing sequence by position"
        );
        map_diff(ops, Keyed::Sequence(a), Keyed::Sequence(b), path, opts);
        return;
    }

    let mut index = 0usize;
    for record in lcs::align(a, b) {
        match record {
            Align::Equal(_) => index += 1,
            Align::Changed(old, new) => {
                let at = child_path(path, index);
                match (old, new) {
                    (Value::Object(old), Value::Object(new)) => {
                        map_diff(ops, Keyed::Map(old), Keyed::Map(new), &at, opts);
                    }
                    _ => ops.push(PatchOp::replace(at, new.clone())),
                }
                index += 1;
            }
            Align::Inserted(value) => {
                ops.push(PatchOp::add(child_path(path, index), value.clone()));
                index += 1;
            }
            Align::Deleted(value) => {
                trace!(path, index, removed = %value, "element removed");
                ops.push(PatchOp::remove(child_path(path, index)));
            }
        }
    }
}
