//! The effective-partition-key domain.
//!
//! Keys are totally ordered values derived from a record's partition key.
//! The domain is bounded by two sentinels shared between the metadata
//! producer and the routing map: [`EffectiveKey::MIN`] is the inclusive
//! floor, [`EffectiveKey::MAX`] the exclusive ceiling.

use std::fmt;

/// A key in the effective-partition-key domain.
///
/// Ordinary keys are strings ordered lexicographically; the empty string is
/// the minimal key. The exclusive upper bound of the domain is a distinct
/// sentinel that compares greater than every ordinary key, so the total
/// order holds for arbitrary key strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EffectiveKey {
    /// An ordinary key value.
    Key(String),
    /// The exclusive ceiling of the key domain.
    ///
    /// Greater than every ordinary key and contained in no range.
    Max,
}

impl EffectiveKey {
    /// The minimal key: inclusive floor of the domain.
    pub const MIN: Self = Self::Key(String::new());

    /// The exclusive ceiling of the domain.
    pub const MAX: Self = Self::Max;

    /// Creates an ordinary key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::Key(value.into())
    }

    /// Returns true if this is the minimal key.
    #[must_use]
    pub fn is_min(&self) -> bool {
        matches!(self, Self::Key(value) if value.is_empty())
    }

    /// Returns true if this is the exclusive ceiling sentinel.
    #[must_use]
    pub const fn is_max(&self) -> bool {
        matches!(self, Self::Max)
    }

    /// Returns the key string, or `None` for the ceiling sentinel.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Key(value) => Some(value),
            Self::Max => None,
        }
    }
}

impl fmt::Display for EffectiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(value) => f.write_str(value),
            Self::Max => f.write_str("<max>"),
        }
    }
}

impl From<&str> for EffectiveKey {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for EffectiveKey {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}
