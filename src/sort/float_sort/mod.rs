//! # Float Sort (phase 1)
//!
//! Sorts an array of `f32` ascending, in place. Every variant has the same
//! contract: the output is a non-decreasing permutation of the input, with
//! no stability guarantee.
//!
//! ## Variants
//!
//! - **original**: comparison sort driven through an injected `&dyn Fn`
//!   less-than predicate, one indirect call per comparison
//! - **radix**: LSD radix sort over the order-preserving bit image of the
//!   floats; no comparisons, sequential counting passes
//! - **c-qsort**: libc `qsort`, when a C compiler was available at build time
//!
//! NaN ordering is unspecified for every variant.

pub mod code;
pub mod test;

pub use code::*;

use std::sync::Arc;

use crate::dataset::DatasetGenerator;
use crate::error::BenchError;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::measure;

/// Runner for the float sort phase
pub struct FloatSortRunner;

impl AlgorithmRunner for FloatSortRunner {
    fn name(&self) -> &'static str {
        "sort_floats"
    }

    fn description(&self) -> &'static str {
        "Sorts an array of f32 ascending in place"
    }

    fn category(&self) -> &'static str {
        "sort"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        let input: Arc<Vec<f32>> = Arc::new(DatasetGenerator::new(seed).random_sequence(size));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let input = Arc::clone(&input);
                let func = v.function;
                let mut work = vec![0.0f32; input.len()];

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        work.copy_from_slice(&input);
                        let (elapsed, _) = measure(|| func(&mut work));
                        (elapsed, work.get(work.len() / 2).map(|&m| m as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), BenchError> {
        test::verify_all()
    }
}
