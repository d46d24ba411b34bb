//! Baseline float sort driven through an injected ordering predicate.
//!
//! Every comparison goes through a `&dyn Fn`, so the sort pays one indirect
//! call per comparison. This is the reference the other variants are
//! measured and verified against.

use std::cmp::Ordering;

/// Strict less-than on floats.
///
/// NaN compares false against everything, so inputs containing NaN have no
/// specified order.
#[inline]
pub fn float_less(a: f32, b: f32) -> bool {
    a < b
}

/// Sort `data` ascending using `less` as the only ordering primitive.
///
/// The sort is unstable. With a predicate that is not a strict weak order
/// (for example `float_less` on data containing NaN) the resulting order is
/// unspecified and the underlying sort may panic on a detected violation.
///
/// # Example
/// ```
/// use sort_rank_bench::sort::float_sort::{sort_by_predicate, float_less};
///
/// let mut data = [3.0, -1.5, 2.0];
/// sort_by_predicate(&mut data, &float_less);
/// assert_eq!(data, [-1.5, 2.0, 3.0]);
/// ```
pub fn sort_by_predicate(data: &mut [f32], less: &dyn Fn(f32, f32) -> bool) {
    data.sort_unstable_by(|&a, &b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}

/// Baseline phase-1 strategy: comparison sort through `float_less`.
pub fn sort_original(data: &mut [f32]) {
    sort_by_predicate(data, &float_less);
}
