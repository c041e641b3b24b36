//! Diff engine for immutable JSON-like trees.
//!
//! Computes an ordered list of `add` / `remove` / `replace` operations that,
//! applied in order, turn one `serde_json::Value` into another. Paths use
//! JSON Pointer escaping, so the output can be fed to JSON Patch consumers.
//!
//! Maps are compared key by key. Sequences are aligned with a longest common
//! subsequence and diffed element by element, unless the configured
//! [`SequenceStrategy`] says to replace them whole. Sequences too large to
//! align cheaply are compared position by position instead.
//!
//! # Example
//!
//! ```
//! use imdiff::{diff, DiffOptions, PatchOp};
//! use serde_json::json;
//!
//! let patch = diff(&json!([1, 2, 3]), &json!([1, 5, 3]), &DiffOptions::default());
//! assert_eq!(patch.ops, vec![PatchOp::replace("/1", json!(5))]);
//! ```

pub mod differ;
pub mod error;
pub mod lcs;
mod map_diff;
pub mod options;
mod sequence_diff;

pub use differ::{diff, diff_at, diff_with, Differ};
pub use error::{DiffError, DiffResult};
pub use imdiff_types::{OpKind, Patch, PatchOp, TreeKind};
pub use options::{DiffOptions, SequenceStrategy, DEFAULT_ALIGNMENT_LIMIT};
