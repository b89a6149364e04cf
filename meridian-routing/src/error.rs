//! Routing map error types.
//!
//! An incomplete set of ranges is not an error: construction reports it by
//! returning no map, since the caller can retry once more metadata arrives.
//! The variants here are the non-recoverable conditions.

use meridian_core::{EffectiveKey, RangeId};
use thiserror::Error;

/// Result type for routing map operations.
pub type RoutingResult<T> = Result<T, RoutingMapError>;

/// Errors that can occur while building a routing map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingMapError {
    /// Two ranges claim the same keys.
    ///
    /// The partitioning metadata itself is inconsistent; unlike an
    /// incomplete view, refetching from the same source will not cure it.
    #[error("ranges {first} and {second} overlap at key '{boundary}'")]
    OverlappingRanges {
        /// Id of the earlier range in sort order.
        first: RangeId,
        /// Id of the later range in sort order.
        second: RangeId,
        /// The key at which the later range begins inside the earlier one.
        boundary: EffectiveKey,
    },

    /// The input holds more ranges than a single map supports.
    #[error("too many ranges: {count} (max {max})")]
    TooManyRanges {
        /// Number of ranges in the input.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
}
