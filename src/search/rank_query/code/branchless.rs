//! Branchless lower-bound search.
//!
//! The loop runs a fixed ⌈log2 N⌉ iterations for a given N regardless of the
//! query, and the only data-dependent step is a select that compiles to a
//! conditional move, so random queries cause no branch mispredictions.

use super::original::assert_same_len;

#[inline]
pub fn lower_bound_branchless(data: &[f32], value: f32) -> usize {
    if data.is_empty() {
        return 0;
    }

    let mut base = 0;
    let mut len = data.len();
    while len > 1 {
        let half = len / 2;
        base = if data[base + half - 1] < value {
            base + half
        } else {
            base
        };
        len -= half;
    }
    base + usize::from(data[base] < value)
}

/// # Panics
/// Panics if `result` and `query` differ in length.
pub fn rank_query_branchless(result: &mut [usize], data: &[f32], query: &[f32]) {
    assert_same_len(result, query);

    for (slot, &value) in result.iter_mut().zip(query) {
        *slot = lower_bound_branchless(data, value);
    }
}
