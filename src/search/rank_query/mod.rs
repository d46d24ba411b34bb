//! # Rank Query (phase 2)
//!
//! For each query value `q`, compute its rank against ascending `data`: the
//! lower-bound insertion index, i.e. how many elements are strictly less
//! than `q`. Duplicates in `data` always resolve to the first position not
//! less than `q`.
//!
//! ## Two algorithmic approaches
//!
//! - **Sort–merge sweep** (`original`): sort `(value, index)` pairs of the
//!   queries, then advance a single pointer through `data`. O(N log N) for
//!   the query sort, O(N) amortized merge, sequential access to `data`, but
//!   O(N) extra memory and scattered writes into `result`.
//! - **Independent binary search** (`binary_search`, `branchless`): O(log N)
//!   random probes per query, no auxiliary memory, no reordering, and every
//!   query independent of the others.
//!
//! All variants produce identical results for non-NaN inputs; the rank of a
//! NaN query is unspecified.

pub mod code;
pub mod test;

pub use code::*;

use std::sync::Arc;

use crate::dataset::DatasetGenerator;
use crate::error::BenchError;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::measure;

/// Order-independent checksum of a rank vector, used as the result sample.
pub fn rank_checksum(ranks: &[usize]) -> f64 {
    ranks
        .iter()
        .fold(0u64, |acc, &r| acc.wrapping_add(r as u64)) as f64
}

/// Runner for the rank query phase
pub struct RankQueryRunner;

impl AlgorithmRunner for RankQueryRunner {
    fn name(&self) -> &'static str {
        "rank_query"
    }

    fn description(&self) -> &'static str {
        "Lower-bound rank of every query against sorted f32 data"
    }

    fn category(&self) -> &'static str {
        "search"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        let (data, query) = DatasetGenerator::new(seed).rank_workload(size);
        let data: Arc<Vec<f32>> = Arc::new(data);
        let query: Arc<Vec<f32>> = Arc::new(query);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let data = Arc::clone(&data);
                let query = Arc::clone(&query);
                let func = v.function;
                let mut result = vec![0usize; size];

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, _) = measure(|| func(&mut result, &data, &query));
                        (elapsed, Some(rank_checksum(&result)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), BenchError> {
        test::verify_all()
    }
}
