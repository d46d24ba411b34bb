//! Registry runner: benchmark every algorithm at every size, and CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::BenchError;
use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::timer::{measure_variants, TimingConfig};

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub median_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of a registry run, indexed `[algorithm][size]`.
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Benchmark all `algorithms` at every size in `sizes`.
///
/// Each (algorithm, size) pair gets its own dataset derived from `seed`, so
/// every variant of one algorithm sees identical input.
pub fn run_algorithms(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> GroupedResults {
    let mut results = Vec::with_capacity(algorithms.len());
    let mut raw_data = Vec::new();

    for algo in algorithms {
        let mut per_size = Vec::with_capacity(sizes.len());

        for &size in sizes {
            let dataset_seed = seed ^ (size as u64).rotate_left(32);
            info!(algorithm = algo.name(), size, "benchmarking");

            let closures = algo.get_variant_closures(size, dataset_seed);
            let measured = measure_variants(closures, config);

            for r in &measured {
                debug!(
                    algorithm = algo.name(),
                    variant = %r.name,
                    size,
                    avg_ns = r.avg_time.as_nanos() as u64,
                    "variant measured"
                );
                raw_data.push(RawTimingData {
                    algo_name: algo.name().to_string(),
                    variant_name: r.name.clone(),
                    input_size: size,
                    avg_nanos: r.avg_time.as_nanos() as u64,
                    median_nanos: r.median_time.as_nanos() as u64,
                    result_sample: r.result_sample,
                });
            }

            per_size.push(measured);
        }

        results.push(per_size);
    }

    GroupedResults { results, raw_data }
}

/// Export timing data to a CSV file
pub fn export_csv(path: &Path, data: &[RawTimingData]) -> Result<(), BenchError> {
    write_csv(path, data).map_err(|source| BenchError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

fn write_csv(path: &Path, data: &[RawTimingData]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(
        file,
        "algorithm,variant,compiler,input_size,avg_time_ns,median_time_ns,result"
    )?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            file,
            "{},{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.median_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    file.flush()
}
