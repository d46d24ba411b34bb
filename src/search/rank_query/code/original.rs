//! Sort–merge sweep: the baseline rank query.
//!
//! Queries are paired with their original positions and sorted by value.
//! One pointer then walks forward over `data`; because the queries arrive in
//! ascending order the pointer never moves back, so the whole merge is O(N)
//! after the O(N log N) query sort, with purely sequential reads of `data`.
//! Each rank is scattered back to the query's original slot.

/// Check the length contract shared by every rank query variant: one result
/// slot per query. `data` may have any length.
#[inline]
pub(crate) fn assert_same_len(result: &[usize], query: &[f32]) {
    assert_eq!(
        result.len(),
        query.len(),
        "result and query must have the same length"
    );
}

/// Compute `result[i]` = number of `data` elements strictly less than
/// `query[i]`, for ascending `data`.
///
/// The pointer advance is bounded by `data.len()`: a query above every
/// element gets rank `data.len()` without touching memory past the end of
/// `data`.
/// NaN queries get an unspecified rank.
///
/// # Panics
/// Panics if `result` and `query` differ in length.
///
/// # Example
/// ```
/// use sort_rank_bench::search::rank_query::rank_query_sweep;
///
/// let data = [1.0, 3.0, 5.0, 7.0];
/// let query = [4.0, 9.0, 0.0, 1.0];
/// let mut result = [0; 4];
/// rank_query_sweep(&mut result, &data, &query);
/// assert_eq!(result, [2, 4, 0, 0]);
/// ```
pub fn rank_query_sweep(result: &mut [usize], data: &[f32], query: &[f32]) {
    assert_same_len(result, query);

    let mut pending: Vec<(f32, usize)> = query.iter().copied().zip(0..).collect();
    pending.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

    let mut cursor = 0;
    for &(value, slot) in &pending {
        while cursor < data.len() && data[cursor] < value {
            cursor += 1;
        }
        result[slot] = cursor;
    }
}
