//! Longest-common-subsequence alignment of two sequences.
//!
//! Uses the `similar` crate's LCS algorithm with structural equality on
//! `serde_json::Value`. The raw delete/insert hunks are folded into
//! [`Align`] records that the granular sequence differ walks left to right.
//!
//! # Pairing
//!
//! A deleted run directly followed by an inserted run is a replace hunk of
//! `old_len` old elements and `new_len` new elements. The first
//! `min(old_len, new_len)` elements are paired positionally as
//! [`Align::Changed`]; the surplus follows as [`Align::Deleted`] (old side
//! longer) or [`Align::Inserted`] (new side longer). So the records consuming
//! a position of the new sequence (`Equal`, `Changed`, `Inserted`) always
//! number `b.len()`.

use std::convert::Infallible;

use serde_json::Value;
use similar::algorithms::{lcs, DiffHook, Replace};

/// One position of an alignment between an old and a new sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align<'a> {
    /// An element present, unchanged, on both sides.
    Equal(&'a Value),
    /// An old element paired with the new element that took its place.
    Changed(&'a Value, &'a Value),
    /// An element only present in the new sequence.
    Inserted(&'a Value),
    /// An element only present in the old sequence.
    Deleted(&'a Value),
}

impl<'a> Align<'a> {
    /// Whether this record occupies a position of the new sequence.
    pub fn consumes_new(&self) -> bool {
        !matches!(self, Align::Deleted(_))
    }

    /// The old-side element, if any.
    pub fn old_value(&self) -> Option<&'a Value> {
        match *self {
            Align::Equal(v) | Align::Changed(v, _) | Align::Deleted(v) => Some(v),
            Align::Inserted(_) => None,
        }
    }

    /// The new-side element, if any.
    pub fn new_value(&self) -> Option<&'a Value> {
        match *self {
            Align::Equal(v) | Align::Changed(_, v) | Align::Inserted(v) => Some(v),
            Align::Deleted(_) => None,
        }
    }
}

/// Align `a` against `b`.
///
/// Runs in `O(len(a) * len(b))` time and space in the worst case.
pub fn align<'a>(a: &'a [Value], b: &'a [Value]) -> Vec<Align<'a>> {
    let mut hook = Replace::new(Collector {
        a,
        b,
        records: Vec::with_capacity(a.len().max(b.len())),
    });
    let outcome = lcs::diff(&mut hook, a, 0..a.len(), b, 0..b.len()).and_then(|()| hook.finish());
    match outcome {
        Ok(()) => hook.into_inner().records,
        Err(never) => match never {},
    }
}

/// Collects hunks reported by the LCS algorithm into alignment records.
struct Collector<'a> {
    a: &'a [Value],
    b: &'a [Value],
    records: Vec<Align<'a>>,
}

impl DiffHook for Collector<'_> {
    type Error = Infallible;

    fn equal(&mut self, old_index: usize, _new_index: usize, len: usize) -> Result<(), Infallible> {
        let a = self.a;
        self.records
            .extend(a[old_index..old_index + len].iter().map(Align::Equal));
        Ok(())
    }

    fn delete(&mut self, old_index: usize, old_len: usize, _new_index: usize) -> Result<(), Infallible> {
        let a = self.a;
        self.records
            .extend(a[old_index..old_index + old_len].iter().map(Align::Deleted));
        Ok(())
    }

    fn insert(&mut self, _old_index: usize, new_index: usize, new_len: usize) -> Result<(), Infallible> {
        let b = self.b;
        self.records
            .extend(b[new_index..new_index + new_len].iter().map(Align::Inserted));
        Ok(())
    }

    fn replace(
        &mut self,
        old_index: usize,
        old_len: usize,
        new_index: usize,
        new_len: usize,
    ) -> Result<(), Infallible> {
        let paired = old_len.min(new_len);
        let (a, b) = (self.a, self.b);
        self.records.extend(
            a[old_index..old_index + paired]
                .iter()
                .zip(&b[new_index..new_index + paired])
                .map(|(old, new)| Align::Changed(old, new)),
        );
        if old_len > paired {
            self.delete(old_index + paired, old_len - paired, new_index + paired)?;
        }
        if new_len > paired {
            self.insert(old_index + paired, new_index + paired, new_len - paired)?;
        }
        Ok(())
    }
}
