//! Core types for bidsort.
//!
//! This module defines:
//! - [`Record`]: a string-keyed row with opaque payload fields.
//! - [`KeyAccess`]: the trait the sort algorithms operate through.
//! - [`ByRecord`] / [`ByKey`]: record-slice views selecting a swap policy.
//! - [`SortError`]: failures reported by the range-taking entry points.

use std::collections::VecDeque;
use std::mem;

use thiserror::Error;

/// One sortable row: a comparison key plus payload fields that are carried
/// along but never inspected by the sort algorithms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    /// Unique identifier. Payload; not compared.
    pub id: String,
    /// The sort discriminant ("title" in the auction domain this grew out of).
    pub key: String,
    /// Grouping label. Payload; not compared.
    pub category: String,
    /// Monetary amount. Payload; not compared.
    pub amount: f64,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        key: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            category: category.into(),
            amount,
        }
    }
}

/// A trait for reading and reordering sortable keys in place.
///
/// The sort algorithms see a collection only through this trait: the key at
/// an index, the length, and a position swap. Swap semantics belong to the
/// implementor, which is what lets [`ByRecord`] and [`ByKey`] give two
/// different answers to "what travels when positions are exchanged".
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use bidsort::KeyAccess;
///
/// struct Catalog {
///     titles: Vec<String>,
/// }
///
/// impl KeyAccess for Catalog {
///     fn key(&self, index: usize) -> &str {
///         &self.titles[index]
///     }
///
///     fn len(&self) -> usize {
///         self.titles.len()
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.titles.swap(a, b);
///     }
/// }
/// ```
pub trait KeyAccess {
    /// Returns the comparison key at `index`.
    fn key(&self, index: usize) -> &str;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchanges the items at positions `a` and `b`. Must be a no-op when
    /// `a == b`.
    fn swap(&mut self, a: usize, b: usize);
}

// Blanket implementation for slices of string-like elements. The element is
// its own key, so both swap policies coincide.
impl<T: AsRef<str>> KeyAccess for [T] {
    fn key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: AsRef<str>> KeyAccess for Vec<T> {
    fn key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Implementation for VecDeque, which has O(1) random access and an in-place
// swap of its own.
impl<T: AsRef<str>> KeyAccess for VecDeque<T> {
    fn key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// View over a record slice that moves whole records when the sort swaps
/// positions: payload fields travel with their key.
///
/// This is the view to reach for unless you specifically need the
/// column-stationary behavior of [`ByKey`].
///
/// # Examples
///
/// ```
/// use bidsort::{ByRecord, Record, selection_sort};
///
/// let mut bids = vec![
///     Record::new("98223", "Office Chair", "General Fund", 52.0),
///     Record::new("98109", "Bicycle", "Parks", 87.5),
/// ];
///
/// selection_sort(&mut ByRecord(&mut bids));
///
/// assert_eq!(bids[0].key, "Bicycle");
/// assert_eq!(bids[0].id, "98109");
/// ```
pub struct ByRecord<'a>(pub &'a mut [Record]);

impl KeyAccess for ByRecord<'_> {
    fn key(&self, index: usize) -> &str {
        &self.0[index].key
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

/// View over a record slice that exchanges only the key strings: payload
/// fields stay in their original rows.
///
/// After sorting through this view the key column is ordered, but a row's
/// payload no longer pairs with the key it started next to. Callers that
/// rely on that pairing want [`ByRecord`] instead; this view exists for the
/// cases where the payload columns are positional and must not move.
pub struct ByKey<'a>(pub &'a mut [Record]);

impl KeyAccess for ByKey<'_> {
    fn key(&self, index: usize) -> &str {
        &self.0[index].key
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.0.split_at_mut(hi);
        mem::swap(&mut head[lo].key, &mut tail[0].key);
    }
}

/// Failures reported by the range-taking sort entry points.
///
/// A failed call leaves the collection as a valid permutation of the same
/// records; callers must not assume the requested range was touched
/// atomically or not at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The requested range reaches past the end of the collection.
    #[error("sort range {begin}..={end} out of bounds for collection of length {len}")]
    OutOfRange {
        begin: usize,
        end: usize,
        len: usize,
    },
}
