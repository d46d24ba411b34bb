//! Shared benchmark utilities.
//!
//! Wall-clock measurement helpers, schedule shuffling and display
//! formatting used by both the phase harness and the variant registry.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Measurement value type. Phases run over millions of elements, so
/// wall-clock time is precise enough.
pub type Measurement = Duration;

/// Read the current instant
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Time elapsed since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Run `f` once and return how long it took together with its output.
#[inline(always)]
pub fn measure<R>(f: impl FnOnce() -> R) -> (Measurement, R) {
    let start = now();
    let result = std::hint::black_box(f());
    (elapsed(start), result)
}

/// Duration in fractional milliseconds
pub fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1e3
}

/// How many times faster `optimized` was than `baseline`.
///
/// Two zero durations count as equal speed; a zero optimized time against a
/// non-zero baseline is reported as infinite.
pub fn speedup(baseline: Duration, optimized: Duration) -> f64 {
    match (baseline.is_zero(), optimized.is_zero()) {
        (true, true) => 1.0,
        (false, true) => f64::INFINITY,
        _ => baseline.as_secs_f64() / optimized.as_secs_f64(),
    }
}

/// Seeded Fisher-Yates shuffle
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x2003_0601)
}

/// Human-friendly rendering of a measurement with an adaptive unit.
pub fn format_measurement(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos >= 1_000_000_000 {
        format!("{:.3} s", d.as_secs_f64())
    } else if nanos >= 1_000_000 {
        format!("{:.3} ms", as_millis_f64(d))
    } else if nanos >= 1_000 {
        format!("{:.3} µs", nanos as f64 / 1e3)
    } else {
        format!("{} ns", nanos)
    }
}
