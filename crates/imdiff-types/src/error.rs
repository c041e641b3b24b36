use thiserror::Error;

/// Errors produced by path and operation handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid pointer {0:?}: must be empty or start with '/'")]
    InvalidPointer(String),

    #[error("invalid escape sequence in segment {0:?}")]
    InvalidEscape(String),
}

/// Convenience alias for results carrying a [`TypeError`].
pub type TypeResult<T> = Result<T, TypeError>;
