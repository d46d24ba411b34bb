//! Registry CLI: benchmark every variant of each phase across sizes.
//!
//! Usage:
//!   strategy-bench                    # Run all algorithms
//!   strategy-bench --list             # List available algorithms
//!   strategy-bench rank_query         # Run one algorithm
//!   strategy-bench --verify           # Check every variant against "original"

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use sort_rank_bench::registry::{build_registry, AlgorithmRunner};
use sort_rank_bench::tracing_setup::{init_subscriber, Verbosity};
use sort_rank_bench::tui;
use sort_rank_bench::utils::cpu_affinity::core_count;
use sort_rank_bench::utils::runner::{export_csv, run_algorithms};
use sort_rank_bench::utils::{time_seed, PinStrategy, TimingConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PinMode {
    Off,
    Global,
    PerExecution,
}

impl From<PinMode> for PinStrategy {
    fn from(mode: PinMode) -> Self {
        match mode {
            PinMode::Off => PinStrategy::Off,
            PinMode::Global => PinStrategy::Global,
            PinMode::PerExecution => PinStrategy::PerExecution,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "strategy-bench",
    version,
    about = "Benchmark every sort and rank query variant across input sizes"
)]
struct Cli {
    /// Name of a single algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List all available algorithms
    #[arg(short, long)]
    list: bool,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_value = "1024,16384,262144,1048576")]
    sizes: Vec<usize>,

    /// Number of measured runs per variant
    #[arg(short, long, default_value_t = 10)]
    runs: usize,

    /// Untimed runs per variant before measuring
    #[arg(long, default_value_t = 1)]
    warmup: usize,

    /// Seed for datasets and schedule (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// Export raw timings to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// CPU pinning while measuring
    #[arg(long, value_enum, default_value_t = PinMode::PerExecution)]
    pin: PinMode,

    /// Verify variants against "original" instead of benchmarking
    #[arg(long)]
    verify: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn verify(algorithms: &[&dyn AlgorithmRunner]) -> ExitCode {
    let mut failed = 0;
    for algo in algorithms {
        match algo.verify() {
            Ok(()) => println!("  ✅ {} ({} variants)", algo.name(), algo.available_variants().len()),
            Err(err) => {
                println!("  ❌ {}: {}", algo.name(), err);
                failed += 1;
            }
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return ExitCode::SUCCESS;
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                error!(algorithm = %name, available = ?registry.list_names(), "algorithm not found");
                return ExitCode::FAILURE;
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    if cli.verify {
        return verify(&algorithms);
    }

    let seed = cli.seed.unwrap_or_else(time_seed);
    info!(seed, cores = ?core_count(), "starting benchmark run");

    let config = TimingConfig {
        runs_per_variant: cli.runs,
        warmup_iterations: cli.warmup,
        pin_strategy: cli.pin.into(),
        schedule_seed: Some(seed),
    };

    tui::print_header("Sort / Rank Query Strategy Benchmarks");

    let grouped = run_algorithms(&algorithms, &cli.sizes, &config, seed);

    if let Some(path) = &cli.csv {
        match export_csv(path, &grouped.raw_data) {
            Ok(()) => info!(path = %path.display(), "raw timings exported"),
            Err(err) => error!(%err, "CSV export failed"),
        }
    }

    for (algo, per_size) in algorithms.iter().zip(grouped.results) {
        tui::print_algo_info_box(*algo);

        for (&size, mut results) in cli.sizes.iter().zip(per_size) {
            tui::sort_variants(&mut results);
            tui::print_results_table(&results, size, cli.runs);
        }
    }

    println!("Note: Speedup is relative to the 'original' variant.");
    ExitCode::SUCCESS
}
