//! Algorithm registry for dynamic discovery and execution.
//!
//! Each phase registers one runner exposing all of its variants, so the CLI
//! can benchmark and verify them without knowing their concrete types.

use crate::error::BenchError;
use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark
pub type BenchmarkResult = VariantResult;

/// A closure running one timed execution of a variant
pub type VariantClosure<'a> = Variant<'a>;

/// Trait that every registered algorithm implements
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g. "rank_query")
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Category (e.g. "sort", "search")
    fn category(&self) -> &'static str;

    fn available_variants(&self) -> Vec<&'static str>;

    /// Build one closure per variant over a dataset of `size` elements
    /// generated from `seed`. Each call to a closure performs one timed run;
    /// input preparation happens outside the timed region.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Check every variant against the "original" reference.
    fn verify(&self) -> Result<(), BenchError>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with both phases
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::sort::float_sort::FloatSortRunner);
    registry.register(crate::search::rank_query::RankQueryRunner);

    registry
}
