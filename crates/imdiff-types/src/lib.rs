//! Foundation types for imdiff.
//!
//! This crate provides the value-level vocabulary shared by the diff engine:
//! how a tree value is classified, how paths into a tree are built, and what a
//! patch operation looks like once emitted.
//!
//! # Key Types
//!
//! - [`TreeKind`] — Map / Sequence / Primitive classification of a `serde_json::Value`
//! - [`Segment`] — One step of a path (map key or sequence index)
//! - [`PatchOp`] / [`OpKind`] — A single JSON-Patch-shaped `add`/`remove`/`replace`
//! - [`Patch`] — The ordered list of operations produced by a diff

pub mod error;
pub mod kind;
pub mod op;
pub mod pointer;

pub use error::{TypeError, TypeResult};
pub use kind::TreeKind;
pub use op::{OpKind, Patch, PatchOp};
pub use pointer::{child_path, concat, escape_segment, parse_pointer, unescape_segment, Segment};
