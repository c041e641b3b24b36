//! Keyed diff of maps, and of sequences viewed as index-keyed maps.
//!
//! The sequence view is only used when granular alignment is abandoned for
//! being too large. In that mode removed indices form a contiguous tail, and
//! every removal in a run is addressed at the run's first index: applied in
//! order, each removal shifts the rest of the run down onto that slot.

use imdiff_types::{child_path, PatchOp, Segment};
use serde_json::{map, Map, Value};

use crate::options::DiffOptions;
use crate::sequence_diff::sequence_diff;

/// A container whose children are addressed by key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Keyed<'a> {
    Map(&'a Map<String, Value>),
    Sequence(&'a [Value]),
}

impl<'a> Keyed<'a> {
    fn is_sequence(self) -> bool {
        matches!(self, Keyed::Sequence(_))
    }

    fn get(self, key: Segment<'_>) -> Option<&'a Value> {
        match (self, key) {
            (Keyed::Map(map), Segment::Key(key)) => map.get(key),
            (Keyed::Sequence(items), Segment::Index(index)) => items.get(index),
            _ => None,
        }
    }

    fn contains(self, key: Segment<'_>) -> bool {
        self.get(key).is_some()
    }

    fn entries(self) -> Entries<'a> {
        match self {
            Keyed::Map(map) => Entries::Map(map.iter()),
            Keyed::Sequence(items) => Entries::Sequence(items.iter().enumerate()),
        }
    }
}

/// Children of a [`Keyed`] container in iteration order.
enum Entries<'a> {
    Map(map::Iter<'a>),
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Segment<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Map(iter) => iter.next().map(|(key, value)| (Segment::Key(key), value)),
            Entries::Sequence(iter) => iter.next().map(|(index, value)| (Segment::Index(index), value)),
        }
    }
}

/// Append the operations turning `a` into `b` to `ops`.
///
/// Keys of `a` are visited in `a`'s order, emitting nested diffs, replaces and
/// removals; keys only present in `b` are then added in `b`'s order.
pub(crate) fn map_diff(
    ops: &mut Vec<PatchOp>,
    a: Keyed<'_>,
    b: Keyed<'_>,
    path: &str,
    opts: &DiffOptions,
) {
    if a == b {
        return;
    }

    let list_shaped = a.is_sequence() && b.is_sequence();
    // (first, last) index of the run of removals currently being emitted.
    let mut removed_run: Option<(usize, usize)> = None;

    for (key, a_value) in a.entries() {
        if let Some(b_value) = b.get(key) {
            diff_entry(ops, a_value, b_value, &child_path(path, key), opts);
            continue;
        }

        let removal_key = match key {
            Segment::Index(index) if list_shaped => {
                let first = match removed_run {
                    Some((first, last)) if last + 1 == index => first,
                    _ => index,
                };
                removed_run = Some((first, index));
                Segment::Index(first)
            }
            _ => key,
        };
        ops.push(PatchOp::remove(child_path(path, removal_key)));
    }

    for (key, b_value) in b.entries() {
        if !a.contains(key) {
            ops.push(PatchOp::add(child_path(path, key), b_value.clone()));
        }
    }
}

/// Compare two values found under the same key.
fn diff_entry(ops: &mut Vec<PatchOp>, a: &Value, b: &Value, path: &str, opts: &DiffOptions) {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            map_diff(ops, Keyed::Map(a), Keyed::Map(b), path, opts);
        }
        (Value::Array(a), Value::Array(b)) => sequence_diff(ops, a, b, path, opts),
        _ if a != b => ops.push(PatchOp::replace(path, b.clone())),
        _ => {}
    }
}
