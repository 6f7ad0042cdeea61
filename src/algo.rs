//! In-place comparison sorts over string keys.
//!
//! Two interchangeable strategies operate through [`KeyAccess`]:
//! - [`quick_sort`] / [`quick_sort_iterative`]: Hoare partition scheme with a
//!   fixed midpoint pivot index. Average O(n log n), worst case O(n²).
//! - [`selection_sort`]: O(n²) comparisons, at most `n - 1` effective swaps.
//!
//! Keys compare byte-wise (`str`'s `Ord`): ordinal codepoint order, no
//! locale collation, no case folding. Neither strategy is stable.

use crate::core::{KeyAccess, SortError};

/// Sorts the inclusive index range `[begin, end]` ascending by key, in place.
///
/// Recursive driver: partition the range around the key at the fixed
/// midpoint index, then recurse into `[begin, split]` and `[split + 1, end]`.
/// Sort a whole collection with `begin = 0, end = len - 1`; skip the call
/// entirely for empty collections.
///
/// A degenerate range (`begin >= end`, zero or one element — which also
/// covers an inverted range) returns `Ok(())` without touching anything.
///
/// # Errors
///
/// [`SortError::OutOfRange`] if `end` reaches past the end of the
/// collection for a non-degenerate range. The range is left untouched.
///
/// # Resource limits
///
/// Recursion depth is O(log n) on average but O(n) against adversarial key
/// orderings, because the midpoint pivot is fixed rather than sampled. Very
/// large hostile inputs can exhaust the call stack; use
/// [`quick_sort_iterative`] where that is a concern.
///
/// # Examples
///
/// ```
/// use bidsort::quick_sort;
///
/// let mut titles = vec!["Banana", "Apple", "Cherry"];
/// let end = titles.len() - 1;
/// quick_sort(&mut titles, 0, end).unwrap();
///
/// assert_eq!(titles, ["Apple", "Banana", "Cherry"]);
/// ```
pub fn quick_sort<A: KeyAccess + ?Sized>(
    access: &mut A,
    begin: usize,
    end: usize,
) -> Result<(), SortError> {
    if begin >= end {
        return Ok(());
    }
    let len = access.len();
    if end >= len {
        return Err(SortError::OutOfRange { begin, end, len });
    }

    quick_sort_span(access, begin, end);
    Ok(())
}

fn quick_sort_span<A: KeyAccess + ?Sized>(access: &mut A, begin: usize, end: usize) {
    if begin >= end {
        return;
    }
    let split = partition(access, begin, end);
    quick_sort_span(access, begin, split);
    quick_sort_span(access, split + 1, end);
}

/// [`quick_sort`] driven by an explicit work stack instead of recursion.
///
/// Same partition routine, same contract, identical resulting order; the
/// pending sub-ranges live in a heap `Vec` of index spans, so pathological
/// inputs cost memory rather than call-stack depth.
///
/// # Errors
///
/// [`SortError::OutOfRange`] under the same conditions as [`quick_sort`].
pub fn quick_sort_iterative<A: KeyAccess + ?Sized>(
    access: &mut A,
    begin: usize,
    end: usize,
) -> Result<(), SortError> {
    if begin >= end {
        return Ok(());
    }
    let len = access.len();
    if end >= len {
        return Err(SortError::OutOfRange { begin, end, len });
    }

    let mut spans = vec![(begin, end)];
    while let Some((low, high)) = spans.pop() {
        if low >= high {
            continue;
        }
        let split = partition(access, low, high);
        spans.push((split + 1, high));
        spans.push((low, split));
    }
    Ok(())
}

/// Sorts the whole collection ascending by key, in place.
///
/// For each position, scan the remainder for the smallest key and swap it
/// into place. O(n²) comparisons regardless of input order, at most `n - 1`
/// effective swaps. Empty and single-element collections are no-ops.
///
/// # Examples
///
/// ```
/// use bidsort::selection_sort;
///
/// let mut titles = vec!["Banana", "Apple", "Cherry"];
/// selection_sort(&mut titles);
///
/// assert_eq!(titles, ["Apple", "Banana", "Cherry"]);
/// ```
pub fn selection_sort<A: KeyAccess + ?Sized>(access: &mut A) {
    let len = access.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min_index = i;
        for j in i + 1..len {
            if access.key(j) < access.key(min_index) {
                min_index = j;
            }
        }
        access.swap(i, min_index);
    }
}

/// Hoare-style partition of `[low, high]` around the key at the fixed
/// midpoint index `low + (high - low) / 2`.
///
/// Returns the split index `j`, with `low <= j < high` for any range of two
/// or more elements: keys in `[low, j]` are `<=` the pivot key and keys in
/// `[j + 1, high]` are `>=` it.
///
/// The pivot key is captured before scanning. The pivot slot's occupant can
/// be displaced by a swap mid-partition, and comparisons must keep using
/// the key that was chosen, not whatever lands in the slot afterwards.
///
/// Callers guarantee `low <= high < len`; degenerate ranges are handled at
/// the driver level, not here.
pub(crate) fn partition<A: KeyAccess + ?Sized>(access: &mut A, low: usize, high: usize) -> usize {
    debug_assert!(low <= high, "partition requires low <= high");
    debug_assert!(high < access.len(), "partition range out of bounds");

    let pivot = low + (high - low) / 2;
    let pivot_key = access.key(pivot).to_owned();

    let mut low_ptr = low;
    let mut high_ptr = high;
    loop {
        // Both scans stop at a key equal to the pivot's, so neither pointer
        // leaves [low, high].
        while access.key(low_ptr) < pivot_key.as_str() {
            low_ptr += 1;
        }
        while pivot_key.as_str() < access.key(high_ptr) {
            high_ptr -= 1;
        }

        if low_ptr >= high_ptr {
            return high_ptr;
        }

        access.swap(low_ptr, high_ptr);
        low_ptr += 1;
        high_ptr -= 1;
    }
}
