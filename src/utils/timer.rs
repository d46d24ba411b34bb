//! Unified timing system for the variant registry.
//!
//! - Warms every variant up before measuring
//! - Runs samples in a shuffled order so no variant always runs first
//! - Optionally pins the thread to one core while measuring
//! - Keeps all raw samples so statistics can be derived afterwards

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Never pin
    Off,
    /// Pin once around the whole schedule
    Global,
    /// Pin and unpin around every sample
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 10)
    pub runs_per_variant: usize,
    /// Number of untimed runs per variant before measuring (default: 1)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Seed for the sample schedule; time-based when `None`
    pub schedule_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 10,
            warmup_iterations: 1,
            pin_strategy: PinStrategy::default(),
            schedule_seed: None,
        }
    }
}

/// A variant to be measured.
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs the variant once and returns (measurement, optional result sample).
    /// Timing happens inside the closure so input preparation stays untimed.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Statistics for a single measured variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of timed samples
    pub samples: usize,
    /// Last result sample; equal across variants when they agree
    pub result_sample: Option<f64>,
}

impl VariantResult {
    /// Coefficient of variation (std-dev / mean)
    pub fn cv(&self) -> f64 {
        let avg = self.avg_time.as_secs_f64();
        if avg > 0.0 {
            self.std_dev.as_secs_f64() / avg
        } else {
            0.0
        }
    }
}

/// Measure several variants with a randomized execution order.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant.max(1);

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    shuffle(&mut tasks, config.schedule_seed.unwrap_or_else(time_seed));

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);
    if let Some(guard) = &global_pin {
        tracing::debug!(core = ?guard.core_id(), "pinned for the whole measurement");
    }

    for variant_idx in tasks {
        let variant = &mut variants[variant_idx];
        let _sample_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed, result) = (variant.run)();

        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            compute_variant_result(variant.name, variant.description, times, result_samples[idx])
        })
        .collect()
}

fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: Vec<Measurement>,
    result_sample: Option<f64>,
) -> VariantResult {
    if times.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            samples: 0,
            result_sample: None,
        };
    }

    let total: Duration = times.iter().sum();
    let avg_time = total / times.len() as u32;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time,
        median_time: calculate_median(&times),
        min_time: times.iter().min().copied().unwrap_or_default(),
        max_time: times.iter().max().copied().unwrap_or_default(),
        std_dev: calculate_std_dev(&times, avg_time),
        samples: times.len(),
        result_sample,
    }
}

/// Sample standard deviation of a list of durations.
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Median of a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted = times.to_vec();
    sorted.sort_unstable();
    sorted[sorted.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bench::measure;

    #[test]
    fn test_measure_variants_empty() {
        let results = measure_variants(vec![], &TimingConfig::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_measure_variants_keeps_registration_order() {
        let variants = vec![
            Variant {
                name: "small",
                description: "Sorts 16 floats",
                run: Box::new(|| {
                    let mut v: Vec<f32> = (0..16).rev().map(|i| i as f32).collect();
                    let (elapsed, _) = measure(|| v.sort_unstable_by(f32::total_cmp));
                    (elapsed, Some(v[0] as f64))
                }),
            },
            Variant {
                name: "large",
                description: "Sorts 4096 floats",
                run: Box::new(|| {
                    let mut v: Vec<f32> = (0..4096).rev().map(|i| i as f32).collect();
                    let (elapsed, _) = measure(|| v.sort_unstable_by(f32::total_cmp));
                    (elapsed, Some(v[0] as f64))
                }),
            },
        ];

        let config = TimingConfig {
            runs_per_variant: 5,
            warmup_iterations: 2,
            pin_strategy: PinStrategy::Global,
            schedule_seed: Some(42),
        };

        let results = measure_variants(variants, &config);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "small");
        assert_eq!(results[1].name, "large");
        assert!(results.iter().all(|r| r.samples == 5));
        assert!(results.iter().all(|r| r.result_sample == Some(0.0)));
        assert!(results.iter().all(|r| r.min_time <= r.median_time && r.median_time <= r.max_time));
    }

    #[test]
    fn test_calculate_median_and_std_dev() {
        let times = [
            Duration::from_nanos(30),
            Duration::from_nanos(10),
            Duration::from_nanos(20),
        ];
        assert_eq!(calculate_median(&times), Duration::from_nanos(20));
        assert_eq!(calculate_std_dev(&times, Duration::from_nanos(20)), Duration::from_nanos(10));
        assert_eq!(calculate_std_dev(&times[..1], Duration::from_nanos(30)), Duration::ZERO);
    }

    #[test]
    fn test_variant_result_statistics() {
        let times: Vec<Measurement> = [40, 10, 30, 20, 50].map(Duration::from_nanos).to_vec();
        let r = compute_variant_result("v", "d", times.clone(), Some(1.0));

        assert_eq!(r.samples, 5);
        assert_eq!(r.median_time, calculate_median(&times));
        assert_eq!(r.median_time, Duration::from_nanos(30));
        assert_eq!(r.min_time, Duration::from_nanos(10));
        assert_eq!(r.max_time, Duration::from_nanos(50));
        assert_eq!(r.avg_time, Duration::from_nanos(30));

        let empty = compute_variant_result("v", "d", Vec::new(), Some(1.0));
        assert_eq!(empty.samples, 0);
        assert_eq!(empty.result_sample, None);
    }
}
