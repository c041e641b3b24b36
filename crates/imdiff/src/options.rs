//! Configuration for the diff engine.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DiffError, DiffResult};

/// Sequences whose `(len(a) + 1) * (len(b) + 1)` reaches this product are not
/// aligned; they are diffed position by position instead.
pub const DEFAULT_ALIGNMENT_LIMIT: usize = 10_000;

/// How a pair of sequences is compared.
///
/// Serializes as the flag accepted by [`SequenceStrategy::from_flag`]:
/// `false`, `true`, or the identity field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SequenceStrategy {
    /// Always align the two sequences and diff them element by element.
    #[default]
    Granular,
    /// Never look inside sequences; a changed sequence is replaced whole.
    ReplaceWhole,
    /// Diff element by element only when both sequences hold maps whose
    /// values at the named field line up index for index. Otherwise replace.
    GranularIfSameIdentity(String),
}

impl SequenceStrategy {
    /// Identify sequence elements by the given field.
    pub fn identify_by(field: impl Into<String>) -> Self {
        Self::GranularIfSameIdentity(field.into())
    }

    /// Parse the three-state flag form: `null`/`false` for granular, `true`
    /// for whole replacement, or a string naming the identity field.
    pub fn from_flag(flag: &Value) -> DiffResult<Self> {
        match flag {
            Value::Null | Value::Bool(false) => Ok(Self::Granular),
            Value::Bool(true) => Ok(Self::ReplaceWhole),
            Value::String(field) => Ok(Self::GranularIfSameIdentity(field.clone())),
            other => Err(DiffError::InvalidStrategy(other.to_string())),
        }
    }

    /// The three-state flag form of this strategy.
    pub fn to_flag(&self) -> Value {
        match self {
            Self::Granular => Value::Bool(false),
            Self::ReplaceWhole => Value::Bool(true),
            Self::GranularIfSameIdentity(field) => Value::String(field.clone()),
        }
    }

    /// The identity field, if this strategy uses one.
    pub fn identity_field(&self) -> Option<&str> {
        match self {
            Self::GranularIfSameIdentity(field) => Some(field),
            Self::Granular | Self::ReplaceWhole => None,
        }
    }
}

impl Serialize for SequenceStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Granular => serializer.serialize_bool(false),
            Self::ReplaceWhole => serializer.serialize_bool(true),
            Self::GranularIfSameIdentity(field) => serializer.serialize_str(field),
        }
    }
}

impl<'de> Deserialize<'de> for SequenceStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagVisitor;

        impl<'de> Visitor<'de> for FlagVisitor {
            type Value = SequenceStrategy;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("null, a boolean, or an identity field name")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(SequenceStrategy::Granular)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(SequenceStrategy::Granular)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(if v {
                    SequenceStrategy::ReplaceWhole
                } else {
                    SequenceStrategy::Granular
                })
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(SequenceStrategy::identify_by(v))
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

/// Configuration for a diff run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// How sequences are compared.
    pub strategy: SequenceStrategy,
    /// Size product at which sequence alignment is abandoned in favour of a
    /// positional diff. See [`DEFAULT_ALIGNMENT_LIMIT`].
    pub alignment_limit: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            strategy: SequenceStrategy::Granular,
            alignment_limit: DEFAULT_ALIGNMENT_LIMIT,
        }
    }
}

impl DiffOptions {
    /// Options that replace changed sequences whole.
    pub fn replace_sequences() -> Self {
        Self {
            strategy: SequenceStrategy::ReplaceWhole,
            ..Default::default()
        }
    }

    /// Options that diff sequences granularly only when their elements keep
    /// the same `field` value at every index.
    pub fn identify_by(field: impl Into<String>) -> Self {
        Self {
            strategy: SequenceStrategy::identify_by(field),
            ..Default::default()
        }
    }

    pub fn with_strategy(mut self, strategy: SequenceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_alignment_limit(mut self, limit: usize) -> Self {
        self.alignment_limit = limit;
        self
    }

    /// Check that the options are usable.
    pub fn validate(&self) -> DiffResult<()> {
        if self.alignment_limit == 0 {
            return Err(DiffError::InvalidOptions(
                "alignment_limit must be greater than zero".into(),
            ));
        }
        if self.strategy.identity_field() == Some("") {
            return Err(DiffError::InvalidOptions(
                "identity field name must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Whether aligning sequences of these lengths would reach the limit.
    pub(crate) fn exceeds_alignment_limit(&self, a_len: usize, b_len: usize) -> bool {
        a_len
            .saturating_add(1)
            .saturating_mul(b_len.saturating_add(1))
            >= self.alignment_limit
    }
}
