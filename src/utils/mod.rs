//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{elapsed, format_measurement, measure, now, shuffle, speedup, time_seed, Measurement};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{
    calculate_median, calculate_std_dev, measure_variants, PinStrategy, TimingConfig, Variant,
    VariantResult,
};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "radix")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
