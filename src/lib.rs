//! # Sort-Rank-Bench
//!
//! Paired baseline/optimized strategies for two phases over large `f32`
//! arrays, and the harness that times them against each other:
//!
//! 1. **sort**: order an array ascending in place
//! 2. **rank query**: for each query, the lower-bound index into the sorted
//!    array (how many elements are strictly less than it)
//!
//! ```
//! use sort_rank_bench::{rank_query_optimized, sort_optimized};
//!
//! let mut data = vec![7.0, 1.0, 5.0, 3.0];
//! sort_optimized(&mut data);
//!
//! let query = [4.0, 10.0, 0.0];
//! let mut ranks = [0; 3];
//! rank_query_optimized(&mut ranks, &data, &query);
//! assert_eq!(ranks, [2, 4, 0]);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod registry;
pub mod search;
pub mod sort;
pub mod strategy;
pub mod tracing_setup;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use strategy::{
    rank_query_baseline, rank_query_optimized, sort_baseline, sort_optimized, Strategy,
};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::{HarnessConfig, RunMode};
    pub use crate::error::{BenchError, ConfigError};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::strategy::Strategy;
}
