//! Float sort implementations.

pub mod c_impl;
mod original;
mod radix;

pub use c_impl::{sort_c_qsort, C_IMPL_AVAILABLE};
pub use original::{float_less, sort_by_predicate, sort_original};
pub use radix::{sort_radix, RADIX_THRESHOLD};

use crate::utils::VariantInfo;

/// Signature shared by every phase-1 strategy.
pub type SortFn = fn(&mut [f32]);

/// Get all float sort variants available in this build.
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    let mut variants: Vec<VariantInfo<SortFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Comparison sort through an injected &dyn Fn predicate",
            function: sort_original,
        },
        VariantInfo {
            name: "radix",
            description: "LSD radix sort on order-preserving u32 keys",
            function: sort_radix,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-qsort",
            description: "libc qsort with a C comparator",
            function: sort_c_qsort,
        });
    }

    variants
}
