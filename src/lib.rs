//! # Bidsort
//!
//! `bidsort` is a small in-place sorting library for string-keyed records,
//! built around two classic, interchangeable comparison sorts: a quicksort
//! using the Hoare partition scheme with a fixed midpoint pivot, and
//! selection sort. Both reorder the caller's collection in place and agree
//! on the final key order, which makes them directly comparable under a
//! benchmark harness.
//!
//! ## Key Features
//!
//! - **Pluggable storage**: the [`KeyAccess`] trait abstracts key reads,
//!   length, and position swaps, so slices, `Vec`s, `VecDeque`s, and custom
//!   (e.g. columnar) layouts all sort without copying into an intermediate
//!   collection.
//! - **Explicit swap policy**: for payload-carrying [`Record`]s, the
//!   [`ByRecord`] view moves whole records while [`ByKey`] moves only the
//!   key strings and leaves payload columns in place.
//! - **Predictable comparisons**: keys compare byte-wise in ordinal order —
//!   no locale collation, no case folding.
//! - **Bounded-stack alternative**: [`quick_sort_iterative`] trades the
//!   recursive driver's call-stack depth for a heap work stack, for inputs
//!   ordered to provoke the fixed pivot's O(n) worst-case depth.
//!
//! ## Usage
//!
//! ### Sorting string collections
//!
//! ```rust
//! use bidsort::{quick_sort, selection_sort};
//!
//! let mut titles = vec!["banana", "apple", "cherry", "date"];
//! let end = titles.len() - 1;
//! quick_sort(&mut titles, 0, end).unwrap();
//!
//! assert_eq!(titles, ["apple", "banana", "cherry", "date"]);
//!
//! let mut titles = vec!["banana", "apple", "cherry"];
//! selection_sort(&mut titles);
//!
//! assert_eq!(titles, ["apple", "banana", "cherry"]);
//! ```
//!
//! ### Sorting records
//!
//! ```rust
//! use bidsort::{ByRecord, Record, quick_sort};
//!
//! let mut bids = vec![
//!     Record::new("98223", "Office Chair", "General Fund", 52.0),
//!     Record::new("98109", "Bicycle", "Parks", 87.5),
//!     Record::new("98354", "Art Supplies", "Schools", 14.25),
//! ];
//!
//! let end = bids.len() - 1;
//! quick_sort(&mut ByRecord(&mut bids), 0, end).unwrap();
//!
//! assert_eq!(bids[0].key, "Art Supplies");
//! assert_eq!(bids[0].id, "98354");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Quicksort**: O(n log n) average, O(n²) worst case. The pivot is the
//!   fixed midpoint index of each range — deliberately not median-of-three —
//!   so adversarial orderings degrade it; that trade-off is part of the
//!   contract rather than something the library second-guesses.
//! - **Selection sort**: O(n²) comparisons on every input, at most `n - 1`
//!   effective swaps. Useful as the baseline the quicksort is measured
//!   against.
//! - **Memory**: no auxiliary full-size buffer; one owned copy of the pivot
//!   key per partition call, plus recursion frames (or the iterative
//!   driver's span stack).

pub mod algo;
pub mod core;

pub use algo::{quick_sort, quick_sort_iterative, selection_sort};
pub use core::{ByKey, ByRecord, KeyAccess, Record, SortError};

pub mod prelude {
    pub use crate::algo::{quick_sort, quick_sort_iterative, selection_sort};
    pub use crate::core::{ByKey, ByRecord, KeyAccess, Record, SortError};
}
