//! Meridian Routing - Client-side partition routing map.
//!
//! This crate answers "which partitions must I contact for this key, range,
//! or set of ranges" for a key-range-partitioned dataset. A [`RoutingMap`]
//! is an immutable snapshot of the partitioning metadata, validated at
//! construction to cover the whole key domain with no gaps and no overlaps;
//! after that every lookup is a pure O(log n) decision over a sorted table.
//!
//! # Design (`TigerStyle`)
//!
//! - **Validate once, trust forever**: completeness is proven at
//!   construction, lookups rely on the established invariants
//! - **Immutable snapshots**: a stale map is replaced, never mutated
//! - **Explicit limits**: the number of ranges per map is bounded

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod routing_map;
mod search;

pub use error::{RoutingMapError, RoutingResult};
pub use routing_map::{RoutingMap, RANGES_MAX};
pub use search::{ceiling_by, floor_by};
