//! Floor and ceiling binary-search primitives.
//!
//! Both point lookup and overlap resolution need "nearest index" searches
//! over the sorted range table. The insertion-point adjustment lives here,
//! in two small separately tested helpers, instead of being repeated at
//! each call site.

use std::cmp::Ordering;

/// Returns the largest index whose element compares `Less` or `Equal` to
/// the probe target, or 0 if every element compares `Greater`.
///
/// `compare` reports the ordering of an element relative to the target, as
/// in [`slice::binary_search_by`]; the slice must be sorted under the same
/// ordering.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn floor_by<T, F>(items: &[T], compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    assert!(!items.is_empty(), "floor_by requires a non-empty slice");
    match items.binary_search_by(compare) {
        Ok(index) => index,
        Err(insertion) => insertion.saturating_sub(1),
    }
}

/// Returns the smallest index whose element compares `Greater` or `Equal`
/// to the probe target, or `items.len() - 1` if every element compares
/// `Less`.
///
/// Same comparator contract as [`floor_by`].
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn ceiling_by<T, F>(items: &[T], compare: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    assert!(!items.is_empty(), "ceiling_by requires a non-empty slice");
    match items.binary_search_by(compare) {
        Ok(index) => index,
        Err(insertion) => insertion.min(items.len() - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[u32] = &[10, 20, 30, 40];

    fn floor(target: u32) -> usize {
        floor_by(ITEMS, |item| item.cmp(&target))
    }

    fn ceiling(target: u32) -> usize {
        ceiling_by(ITEMS, |item| item.cmp(&target))
    }

    #[test]
    fn test_floor_exact_match() {
        assert_eq!(floor(10), 0);
        assert_eq!(floor(30), 2);
        assert_eq!(floor(40), 3);
    }

    #[test]
    fn test_floor_between_elements() {
        assert_eq!(floor(15), 0);
        assert_eq!(floor(35), 2);
    }

    #[test]
    fn test_floor_clamps_below() {
        // Everything is greater than 5; clamp to the first index.
        assert_eq!(floor(5), 0);
    }

    #[test]
    fn test_floor_past_end() {
        assert_eq!(floor(99), 3);
    }

    #[test]
    fn test_ceiling_exact_match() {
        assert_eq!(ceiling(10), 0);
        assert_eq!(ceiling(40), 3);
    }

    #[test]
    fn test_ceiling_between_elements() {
        assert_eq!(ceiling(15), 1);
        assert_eq!(ceiling(35), 3);
    }

    #[test]
    fn test_ceiling_clamps_above() {
        // Everything is less than 99; clamp to the last index.
        assert_eq!(ceiling(99), 3);
    }

    #[test]
    fn test_ceiling_before_start() {
        assert_eq!(ceiling(5), 0);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_floor_empty_slice_panics() {
        let empty: &[u32] = &[];
        let _ = floor_by(empty, |item| item.cmp(&10));
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_ceiling_empty_slice_panics() {
        let empty: &[u32] = &[];
        let _ = ceiling_by(empty, |item| item.cmp(&10));
    }

    #[test]
    fn test_floor_single_element() {
        let items = &[20_u32];
        assert_eq!(floor_by(items, |item| item.cmp(&10)), 0);
        assert_eq!(floor_by(items, |item| item.cmp(&20)), 0);
        assert_eq!(floor_by(items, |item| item.cmp(&30)), 0);
    }
}
