//! Baseline/optimized selection for both phases.
//!
//! A strategy is a capability, not a type hierarchy: each phase has one
//! operation signature, and [`Strategy`] picks which of the two
//! implementations answers it.

use std::fmt;

use crate::search::rank_query::{rank_query_binary_search, rank_query_sweep};
use crate::sort::float_sort::{sort_original, sort_radix};

/// Which implementation of a phase to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Comparison sort through an injected predicate, then the sort–merge sweep.
    Baseline,
    /// Radix sort, then independent binary searches.
    Optimized,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Baseline, Strategy::Optimized];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Baseline => "baseline",
            Strategy::Optimized => "optimized",
        }
    }

    /// Phase 1: sort `data` ascending in place.
    pub fn sort(self, data: &mut [f32]) {
        match self {
            Strategy::Baseline => sort_baseline(data),
            Strategy::Optimized => sort_optimized(data),
        }
    }

    /// Phase 2: `result[i]` = number of elements of ascending `data` below `query[i]`.
    ///
    /// # Panics
    /// Panics if `result` and `query` differ in length.
    pub fn rank_query(self, result: &mut [usize], data: &[f32], query: &[f32]) {
        match self {
            Strategy::Baseline => rank_query_baseline(result, data, query),
            Strategy::Optimized => rank_query_optimized(result, data, query),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort ascending with a general comparison sort driven by `a < b`.
///
/// NaN ordering is unspecified; the sort may panic if it detects that the
/// predicate is not a total order.
pub fn sort_baseline(data: &mut [f32]) {
    sort_original(data);
}

/// Sort ascending with an LSD radix sort over the float bit patterns.
///
/// NaNs are placed by sign bit: negative NaNs first, positive NaNs last.
pub fn sort_optimized(data: &mut [f32]) {
    sort_radix(data);
}

/// Rank queries by sorting them and sweeping one bounded cursor over `data`.
///
/// # Panics
/// Panics if `result` and `query` differ in length.
pub fn rank_query_baseline(result: &mut [usize], data: &[f32], query: &[f32]) {
    rank_query_sweep(result, data, query);
}

/// Rank queries with one lower-bound binary search each.
///
/// # Panics
/// Panics if `result` and `query` differ in length.
pub fn rank_query_optimized(result: &mut [usize], data: &[f32], query: &[f32]) {
    rank_query_binary_search(result, data, query);
}
