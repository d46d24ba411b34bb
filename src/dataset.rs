//! Seeded synthetic datasets for both phases.
//!
//! Every generator method starts a fresh RNG from the same seed, so a
//! generator reproduces exactly the same arrays no matter how many times or
//! in which order its methods are called.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seed used by the harness when none is configured.
pub const DEFAULT_SEED: u64 = 0x2003_0601;

#[derive(Clone, Copy, Debug)]
pub struct DatasetGenerator {
    seed: u64,
}

impl DatasetGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// `n` floats spread uniformly over the whole finite range.
    pub fn random_sequence(&self, n: usize) -> Vec<f32> {
        let mut rng = self.rng();
        (0..n)
            .map(|_| rng.random_range(-1.0f32..1.0) * f32::MAX)
            .collect()
    }

    /// `n` non-decreasing floats with random gaps.
    ///
    /// Starts around `-d * n / 3` and adds a gap drawn from `[0, MAX / n)`
    /// per element, so the sequence crosses zero roughly a third of the way
    /// in and never overflows.
    pub fn ordered_sequence(&self, n: usize) -> Vec<f32> {
        if n == 0 {
            return Vec::new();
        }
        let mut rng = self.rng();
        let max_gap = f32::MAX / n as f32;
        let mut gap = move || rng.random_range(0.0..max_gap);

        let mut current = -gap() * (n as f32 / 3.0);
        let mut data = Vec::with_capacity(n);
        for _ in 0..n {
            data.push(current);
            current += gap();
        }
        data
    }

    /// `n` indices drawn uniformly (with repetition) from `[0, n)`.
    pub fn index_sequence(&self, n: usize) -> Vec<usize> {
        if n == 0 {
            return Vec::new();
        }
        let mut rng = self.rng();
        (0..n).map(|_| rng.random_range(0..n)).collect()
    }

    /// A seeded permutation of `data`.
    pub fn shuffled(&self, data: &[f32]) -> Vec<f32> {
        let mut out = data.to_vec();
        out.shuffle(&mut self.rng());
        out
    }

    /// Ordered reference data plus queries drawn from it, so every query has
    /// at least one exact match.
    pub fn rank_workload(&self, n: usize) -> (Vec<f32>, Vec<f32>) {
        let data = self.ordered_sequence(n);
        let query = queries_from(&data, &self.index_sequence(n));
        (data, query)
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// `query[i] = data[indices[i]]`
///
/// # Panics
/// Panics if an index is out of range for `data`.
pub fn queries_from(data: &[f32], indices: &[usize]) -> Vec<f32> {
    indices.iter().map(|&i| data[i]).collect()
}
