//! Error types for the diff crate.

use imdiff_types::TypeError;

/// Errors that can occur while configuring a diff.
///
/// Diffing itself never fails; these cover option parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A sequence strategy flag was not `null`, a boolean, or a string.
    #[error("invalid sequence strategy flag: {0}")]
    InvalidStrategy(String),

    /// The options do not describe a usable configuration.
    #[error("invalid diff options: {0}")]
    InvalidOptions(String),

    /// A path or operation could not be handled.
    #[error("type error: {0}")]
    Type(#[from] TypeError),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
