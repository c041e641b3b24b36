//! Slash-delimited paths into a tree value.
//!
//! Paths follow JSON Pointer (RFC 6901) escaping: inside a segment `~` is
//! written `~0` and `/` is written `~1`. The empty string addresses the root.

use std::borrow::Cow;
use std::fmt;

use crate::error::{TypeError, TypeResult};

/// One step of a path: a map key or a sequence index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// A map key, stored unescaped.
    Key(&'a str),
    /// A zero-based sequence index.
    Index(usize),
}

impl Segment<'_> {
    /// The segment as it appears inside a path.
    pub fn escaped(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(key) => escape_segment(key),
            Segment::Index(index) => Cow::Owned(index.to_string()),
        }
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(key: &'a str) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment<'_> {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escaped())
    }
}

/// Escape a raw key for use as a path segment.
///
/// `~` must be escaped before `/`, otherwise the `~` introduced by `~1` would
/// be escaped a second time.
pub fn escape_segment(segment: &str) -> Cow<'_, str> {
    if !segment.contains(['~', '/']) {
        return Cow::Borrowed(segment);
    }
    Cow::Owned(segment.replace('~', "~0").replace('/', "~1"))
}

/// Reverse [`escape_segment`].
///
/// A `~` that is not followed by `0` or `1` is rejected.
pub fn unescape_segment(segment: &str) -> TypeResult<String> {
    if !segment.contains('~') {
        return Ok(segment.to_string());
    }
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => return Err(TypeError::InvalidEscape(segment.to_string())),
        }
    }
    Ok(out)
}

/// Append an already-escaped segment to a base path.
pub fn concat(base: &str, escaped: &str) -> String {
    let mut path = String::with_capacity(base.len() + 1 + escaped.len());
    path.push_str(base);
    path.push('/');
    path.push_str(escaped);
    path
}

/// Build the path of a child of `base`.
pub fn child_path<'a>(base: &str, segment: impl Into<Segment<'a>>) -> String {
    let segment: Segment<'a> = segment.into();
    concat(base, &segment.escaped())
}

/// Split a path into its unescaped segments.
///
/// The root path `""` yields no segments. `"/"` yields a single empty key.
pub fn parse_pointer(pointer: &str) -> TypeResult<Vec<String>> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(TypeError::InvalidPointer(pointer.to_string()));
    };
    rest.split('/').map(unescape_segment).collect()
}
