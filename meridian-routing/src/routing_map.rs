//! The partition routing map.
//!
//! Maps the full effective-partition-key domain to physical partitions. A
//! map is built once from fetched partition metadata, validated for
//! completeness, and shared read-only for its whole lifetime; refreshing
//! the metadata means building a brand-new map and swapping the reference.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use meridian_core::{EffectiveKey, KeyRange, QueryRange, RangeId};
use tracing::{debug, warn};

use crate::error::{RoutingMapError, RoutingResult};
use crate::search;

/// Maximum number of ranges in a single routing map.
pub const RANGES_MAX: usize = 65_536;

/// An immutable index from key ranges to partition identities.
///
/// `P` is the caller-owned partition identity: the map never inspects it,
/// requiring only equality and hashing so it can serve as a reverse-lookup
/// key. One table of index-aligned ranges and identities is built at
/// construction together with two auxiliary indexes (by range id and by
/// identity); nothing is mutated afterwards, so a map behind an `Arc` is
/// safe to share across any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct RoutingMap<P> {
    /// Ranges sorted by `min_inclusive`, covering the whole domain.
    ordered_ranges: Vec<KeyRange>,
    /// Partition identities, index-aligned with `ordered_ranges`.
    ordered_info: Vec<P>,
    /// Range id -> index into the ordered table.
    by_id: HashMap<RangeId, usize>,
    /// Partition identity -> index into the ordered table.
    by_info: HashMap<P, usize>,
    /// Tag of the metadata snapshot this map was built from.
    collection_unique_id: String,
}

impl<P> RoutingMap<P>
where
    P: Clone + Eq + Hash,
{
    /// Builds a routing map if the given ranges completely cover the key
    /// domain.
    ///
    /// Returns `Ok(None)` when the ranges are an incomplete view (a gap
    /// between neighbours or at either domain bound, or no ranges at all) -
    /// the expected state while partition metadata is still being fetched.
    ///
    /// Duplicate range ids or partition identities follow map-insertion
    /// semantics: the entry later in sort order wins and a warning is
    /// logged. The duplicated entries still take part in the completeness
    /// check, so duplicated spans surface as an overlap error rather than a
    /// silently corrupted map.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingMapError::OverlappingRanges`] if two ranges claim
    /// the same keys, and [`RoutingMapError::TooManyRanges`] if the input
    /// exceeds [`RANGES_MAX`].
    pub fn try_create_complete<I>(
        pairs: I,
        collection_unique_id: impl Into<String>,
    ) -> RoutingResult<Option<Self>>
    where
        I: IntoIterator<Item = (KeyRange, P)>,
    {
        let mut entries: Vec<(KeyRange, P)> = pairs.into_iter().collect();
        if entries.len() > RANGES_MAX {
            return Err(RoutingMapError::TooManyRanges {
                count: entries.len(),
                max: RANGES_MAX,
            });
        }

        // Stable sort: ranges with equal mins keep their input order. Equal
        // mins only occur in malformed input and surface as overlaps below.
        entries.sort_by(|(left, _), (right, _)| left.min_inclusive.cmp(&right.min_inclusive));

        if !is_complete_set_of_ranges(&entries)? {
            return Ok(None);
        }

        let collection_unique_id = collection_unique_id.into();
        let mut ordered_ranges = Vec::with_capacity(entries.len());
        let mut ordered_info = Vec::with_capacity(entries.len());
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_info = HashMap::with_capacity(entries.len());

        for (index, (range, info)) in entries.into_iter().enumerate() {
            if by_id.insert(range.id.clone(), index).is_some() {
                warn!(
                    id = %range.id,
                    "duplicate range id in partition metadata, keeping the later entry"
                );
            }
            if by_info.insert(info.clone(), index).is_some() {
                warn!(
                    id = %range.id,
                    "duplicate partition identity in partition metadata, keeping the later entry"
                );
            }
            ordered_ranges.push(range);
            ordered_info.push(info);
        }

        debug!(
            ranges = ordered_ranges.len(),
            collection = %collection_unique_id,
            "constructed complete routing map"
        );

        Ok(Some(Self {
            ordered_ranges,
            ordered_info,
            by_id,
            by_info,
            collection_unique_id,
        }))
    }

    /// Returns the range owned by the given partition identity.
    #[must_use]
    pub fn range_by_partition_info(&self, info: &P) -> Option<&KeyRange> {
        self.by_info
            .get(info)
            .map(|&index| &self.ordered_ranges[index])
    }
}

impl<P> RoutingMap<P> {
    /// Returns the range owning the given key.
    ///
    /// Returns `None` only for the domain ceiling sentinel, which no range
    /// contains; every other key resolves to exactly one range.
    #[must_use]
    pub fn range_by_effective_partition_key(&self, key: &EffectiveKey) -> Option<&KeyRange> {
        if key.is_min() {
            // Fast path at the domain floor; also keeps the binary search
            // below free of the "before every range" edge.
            return self.ordered_ranges.first();
        }
        if key.is_max() {
            return None;
        }

        let index = search::floor_by(&self.ordered_ranges, |range| range.min_inclusive.cmp(key));
        let range = &self.ordered_ranges[index];
        // Completeness guarantees the floor range also bounds the key above.
        debug_assert!(range.contains(key));
        Some(range)
    }

    /// Returns the range with the given id.
    #[must_use]
    pub fn range_by_id(&self, id: &str) -> Option<&KeyRange> {
        self.by_id.get(id).map(|&index| &self.ordered_ranges[index])
    }

    /// Returns the partition identity owning the range with the given id.
    #[must_use]
    pub fn info_by_id(&self, id: &str) -> Option<&P> {
        self.by_id.get(id).map(|&index| &self.ordered_info[index])
    }

    /// Returns the owned ranges intersecting any of the given query ranges,
    /// ordered by `min_inclusive` and de-duplicated across queries.
    ///
    /// The scan window per query is bounded by two binary searches instead
    /// of degrading to a linear pass over the table; this operation runs
    /// for every query spanning a key range rather than a single point.
    #[must_use]
    pub fn overlapping_ranges(&self, queries: &[QueryRange]) -> Vec<&KeyRange> {
        let mut matches: BTreeMap<&EffectiveKey, &KeyRange> = BTreeMap::new();

        for query in queries {
            if query.is_empty() {
                continue;
            }

            // Ranges below the floor of `query.min` end at or before the
            // query; ranges past the floor of `query.max` begin beyond it.
            // Everything that can intersect lies inside the window.
            let low = search::floor_by(&self.ordered_ranges, |range| {
                range.min_inclusive.cmp(&query.min)
            });
            let high = search::floor_by(&self.ordered_ranges, |range| {
                range.min_inclusive.cmp(&query.max)
            });

            for owned in &self.ordered_ranges[low..=high] {
                if QueryRange::overlaps(&owned.to_query_range(), query) {
                    matches.insert(&owned.min_inclusive, owned);
                }
            }
        }

        matches.into_values().collect()
    }

    /// Returns the owned ranges intersecting a single query range.
    #[must_use]
    pub fn overlapping_ranges_for(&self, query: &QueryRange) -> Vec<&KeyRange> {
        self.overlapping_ranges(std::slice::from_ref(query))
    }

    /// Ranges sorted by `min_inclusive`, covering the whole key domain.
    #[must_use]
    pub fn ordered_ranges(&self) -> &[KeyRange] {
        &self.ordered_ranges
    }

    /// Partition identities, index-aligned with [`Self::ordered_ranges`].
    #[must_use]
    pub fn ordered_partition_info(&self) -> &[P] {
        &self.ordered_info
    }

    /// Tag of the metadata snapshot this map was built from.
    ///
    /// Never interpreted here; callers compare it against the latest known
    /// metadata generation to detect a stale map.
    #[must_use]
    pub fn collection_unique_id(&self) -> &str {
        &self.collection_unique_id
    }

    /// The partition owning the start of the key domain.
    #[must_use]
    pub fn head_partition(&self) -> &P {
        // Construction rejects empty range sets, so the table is never empty.
        &self.ordered_info[0]
    }

    /// The partition owning the end of the key domain.
    #[must_use]
    pub fn tail_partition(&self) -> &P {
        &self.ordered_info[self.ordered_info.len() - 1]
    }

    /// Number of ranges in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered_ranges.len()
    }

    /// Always false for a constructed map; construction returns no map for
    /// an empty range set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered_ranges.is_empty()
    }

    /// Iterates over `(range, partition identity)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyRange, &P)> + '_ {
        self.ordered_ranges.iter().zip(self.ordered_info.iter())
    }
}

/// Checks that the sorted ranges cover `[MIN, MAX)` contiguously.
///
/// A gap, between neighbours or at either domain bound, makes the set
/// incomplete. Two ranges claiming the same keys is a distinct, fatal
/// condition: incompleteness is cured by fetching more metadata, an
/// overlap is not.
fn is_complete_set_of_ranges<P>(entries: &[(KeyRange, P)]) -> RoutingResult<bool> {
    let (Some((first, _)), Some((last, _))) = (entries.first(), entries.last()) else {
        return Ok(false);
    };

    let mut complete =
        first.min_inclusive == EffectiveKey::MIN && last.max_exclusive == EffectiveKey::MAX;

    for window in entries.windows(2) {
        let previous = &window[0].0;
        let current = &window[1].0;
        match previous.max_exclusive.cmp(&current.min_inclusive) {
            Ordering::Equal => {}
            Ordering::Greater => {
                return Err(RoutingMapError::OverlappingRanges {
                    first: previous.id.clone(),
                    second: current.id.clone(),
                    boundary: current.min_inclusive.clone(),
                });
            }
            Ordering::Less => {
                complete = false;
                break;
            }
        }
    }

    Ok(complete)
}
