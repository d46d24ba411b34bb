//! Rank query implementations.

mod binary_search;
mod branchless;
pub mod c_impl;
mod original;

pub use binary_search::{lower_bound, rank_query_binary_search};
pub use branchless::{lower_bound_branchless, rank_query_branchless};
pub use c_impl::{rank_query_c_binary_search, rank_query_c_sweep, C_IMPL_AVAILABLE};
pub use original::rank_query_sweep;

use crate::utils::VariantInfo;

/// Signature shared by every phase-2 strategy: `(result, data, query)`.
pub type RankQueryFn = fn(&mut [usize], &[f32], &[f32]);

/// Get all rank query variants available in this build.
pub fn available_variants() -> Vec<VariantInfo<RankQueryFn>> {
    let mut variants: Vec<VariantInfo<RankQueryFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Sort queries, then one bounded forward sweep over the data",
            function: rank_query_sweep,
        },
        VariantInfo {
            name: "binary_search",
            description: "Independent lower-bound binary search per query",
            function: rank_query_binary_search,
        },
        VariantInfo {
            name: "branchless",
            description: "Lower-bound search with a conditional move per step",
            function: rank_query_branchless,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-sweep",
            description: "C qsort of queries plus bounded sweep",
            function: rank_query_c_sweep,
        });
        variants.push(VariantInfo {
            name: "c-binary_search",
            description: "C per-query binary search",
            function: rank_query_c_binary_search,
        });
    }

    variants
}
