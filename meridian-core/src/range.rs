//! Partition key ranges and query ranges.
//!
//! A [`KeyRange`] is a contiguous slice of the key domain owned by a single
//! physical partition, always inclusive below and exclusive above. A
//! [`QueryRange`] is a caller-specified interval with explicit bound
//! inclusivity, used to ask the routing map which partitions a scan touches.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::key::EffectiveKey;

/// Stable identifier of a partition key range.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeId(String);

impl RangeId {
    /// Creates a new range id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RangeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RangeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for RangeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A contiguous key range owned by a single physical partition.
///
/// Inclusive of `min_inclusive`, exclusive of `max_exclusive`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRange {
    /// Stable identifier of this range.
    pub id: RangeId,
    /// Inclusive lower bound.
    pub min_inclusive: EffectiveKey,
    /// Exclusive upper bound.
    pub max_exclusive: EffectiveKey,
}

impl KeyRange {
    /// Creates a new key range.
    ///
    /// # Panics
    ///
    /// Panics if `min_inclusive >= max_exclusive`.
    #[must_use]
    pub fn new(
        id: impl Into<RangeId>,
        min_inclusive: impl Into<EffectiveKey>,
        max_exclusive: impl Into<EffectiveKey>,
    ) -> Self {
        let min_inclusive = min_inclusive.into();
        let max_exclusive = max_exclusive.into();
        assert!(
            min_inclusive < max_exclusive,
            "key range min must be < max"
        );
        Self {
            id: id.into(),
            min_inclusive,
            max_exclusive,
        }
    }

    /// Returns true if this range contains the given key.
    #[must_use]
    pub fn contains(&self, key: &EffectiveKey) -> bool {
        *key >= self.min_inclusive && *key < self.max_exclusive
    }

    /// Returns the query range spanning exactly this range.
    #[must_use]
    pub fn to_query_range(&self) -> QueryRange {
        QueryRange::half_open(self.min_inclusive.clone(), self.max_exclusive.clone())
    }
}

/// A caller-specified interval of keys with explicit bound inclusivity.
///
/// Owned partition ranges are always `[min, max)`; query ranges may be open
/// or closed on either side, so boundary cases (a point query, a scan ending
/// exactly on a partition boundary) are expressible without widening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRange {
    /// Lower bound.
    pub min: EffectiveKey,
    /// Upper bound.
    pub max: EffectiveKey,
    /// Whether `min` itself is part of the range.
    pub min_inclusive: bool,
    /// Whether `max` itself is part of the range.
    pub max_inclusive: bool,
}

impl QueryRange {
    /// Creates a new query range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn new(
        min: impl Into<EffectiveKey>,
        max: impl Into<EffectiveKey>,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Self {
        let min = min.into();
        let max = max.into();
        assert!(min <= max, "query range min must be <= max");
        Self {
            min,
            max,
            min_inclusive,
            max_inclusive,
        }
    }

    /// Creates the half-open range `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn half_open(min: impl Into<EffectiveKey>, max: impl Into<EffectiveKey>) -> Self {
        Self::new(min, max, true, false)
    }

    /// Creates the closed single-point range `[key, key]`.
    #[must_use]
    pub fn point(key: impl Into<EffectiveKey>) -> Self {
        let key = key.into();
        Self {
            min: key.clone(),
            max: key,
            min_inclusive: true,
            max_inclusive: true,
        }
    }

    /// Returns true if no key can fall inside this range.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min == self.max && !(self.min_inclusive && self.max_inclusive)
    }

    /// Returns true if this range contains the given key.
    #[must_use]
    pub fn contains(&self, key: &EffectiveKey) -> bool {
        let above_min = match key.cmp(&self.min) {
            Ordering::Greater => true,
            Ordering::Equal => self.min_inclusive,
            Ordering::Less => false,
        };
        let below_max = match key.cmp(&self.max) {
            Ordering::Less => true,
            Ordering::Equal => self.max_inclusive,
            Ordering::Greater => false,
        };
        above_min && below_max
    }

    /// Returns true if the two ranges share at least one key.
    ///
    /// A shared boundary counts only when it is inclusive on both of the
    /// touching sides.
    #[must_use]
    pub fn overlaps(left: &Self, right: &Self) -> bool {
        if left.is_empty() || right.is_empty() {
            return false;
        }
        let left_starts_before_right_ends = match left.min.cmp(&right.max) {
            Ordering::Less => true,
            Ordering::Equal => left.min_inclusive && right.max_inclusive,
            Ordering::Greater => false,
        };
        let right_starts_before_left_ends = match right.min.cmp(&left.max) {
            Ordering::Less => true,
            Ordering::Equal => right.min_inclusive && left.max_inclusive,
            Ordering::Greater => false,
        };
        left_starts_before_right_ends && right_starts_before_left_ends
    }
}
