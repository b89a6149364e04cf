//! Meridian Core - Key-domain value types for Meridian routing.
//!
//! This crate provides the leaf value types consumed by the routing layer:
//! the effective-partition-key domain with its two sentinels, partition key
//! ranges, and caller-supplied query ranges. It deliberately knows nothing
//! about metadata fetching or request dispatch - those live in the
//! collaborators that produce and consume routing decisions.
//!
//! # Design Principles (`TigerStyle`)
//!
//! - **Explicit sentinels**: the key domain is bounded by shared `MIN`/`MAX`
//!   constants, not by convention
//! - **Immutable values**: ranges never change after construction
//! - **No unsafe code**: Safety > Performance

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod key;
mod range;

pub use key::EffectiveKey;
pub use range::{KeyRange, QueryRange, RangeId};
