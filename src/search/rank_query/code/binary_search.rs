//! Independent lower-bound binary search per query.
//!
//! No auxiliary memory and no reordering: each query is answered on its own
//! with O(log N) probes into `data`, and written straight to its own slot.

use super::original::assert_same_len;

/// Index of the first element of ascending `data` that is not less than
/// `value`, i.e. the count of elements strictly less than `value`.
///
/// The search interval `[lo, hi)` starts as `[0, N)` and only shrinks, so
/// every probe is in bounds.
#[inline]
pub fn lower_bound(data: &[f32], value: f32) -> usize {
    let mut lo = 0;
    let mut hi = data.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if data[mid] < value {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Rank every query with [`lower_bound`].
///
/// # Panics
/// Panics if `result` and `query` differ in length.
pub fn rank_query_binary_search(result: &mut [usize], data: &[f32], query: &[f32]) {
    assert_same_len(result, query);

    for (slot, &value) in result.iter_mut().zip(query) {
        *slot = lower_bound(data, value);
    }
}
