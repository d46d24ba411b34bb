//! Phase harness: generate the workload, time both strategies, cross-check
//! their outputs and dump the ranks for external diffing.
//!
//! The run mode comes from [`HarnessConfig::mode`]:
//!
//! - **Phase1Only**: sort a uniformly random sequence. The baseline sorts a
//!   freshly regenerated copy of the same sequence.
//! - **Phase2Only**: rank queries drawn from an ordered sequence, each
//!   strategy writing into its own result buffer.
//! - **Both**: shuffle the ordered sequence, sort it, then rank the queries
//!   against it. Optimized ranks go to `result.txt` and baseline ranks to
//!   `correct.txt`.

pub mod report;

pub use report::{HarnessReport, Phase, PhaseReport};

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{error, info, info_span, warn};

use crate::config::{HarnessConfig, RunMode};
use crate::dataset::DatasetGenerator;
use crate::error::BenchError;
use crate::strategy::Strategy;
use crate::utils::bench::{as_millis_f64, measure};

/// File receiving the optimized ranks in combined mode.
pub const RESULT_FILE: &str = "result.txt";
/// File receiving the baseline ranks in combined mode.
pub const CORRECT_FILE: &str = "correct.txt";

/// Mixed into the seed for the pre-sort shuffle, so the shuffle order is not
/// correlated with the gaps of the ordered sequence.
const SHUFFLE_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Execute the phases selected by `config`.
///
/// Never fails: a rank dump that cannot be written is logged and left out of
/// the report.
pub fn run(config: &HarnessConfig) -> HarnessReport {
    let mode = config.mode();
    let _span = info_span!("harness", ?mode, n = config.data_size).entered();

    let gen = DatasetGenerator::new(config.seed);
    let mut report = HarnessReport {
        mode,
        data_size: config.data_size,
        seed: config.seed,
        phases: Vec::new(),
        result_file: None,
        correct_file: None,
    };

    match mode {
        RunMode::Phase1Only => report.phases.push(run_sort_only(config, &gen)),
        RunMode::Phase2Only => report.phases.push(run_rank_only(config, &gen)),
        RunMode::Both => run_combined(config, &gen, &mut report),
    }

    for phase in [Phase::Sort, Phase::RankQuery] {
        let mismatches = report.phase(phase).and_then(|p| p.mismatches).unwrap_or(0);
        if mismatches > 0 {
            warn!(%phase, mismatches, "optimized and baseline outputs differ");
        }
    }

    report
}

fn run_sort_only(config: &HarnessConfig, gen: &DatasetGenerator) -> PhaseReport {
    let n = config.data_size;

    info!("generating {n} random floats");
    let mut optimized_data = gen.random_sequence(n);

    info!("running optimized phase 1");
    let (optimized, ()) = measure(|| Strategy::Optimized.sort(&mut optimized_data));
    info!(ms = as_millis_f64(optimized), "optimized phase 1 done");

    let (baseline, mismatches) = if config.skip_baseline {
        (None, None)
    } else {
        info!("regenerating input for baseline phase 1");
        let mut baseline_data = gen.random_sequence(n);

        info!("running baseline phase 1");
        let (elapsed, ()) = measure(|| Strategy::Baseline.sort(&mut baseline_data));
        info!(ms = as_millis_f64(elapsed), "baseline phase 1 done");

        (Some(elapsed), Some(count_mismatches(&optimized_data, &baseline_data)))
    };

    PhaseReport {
        phase: Phase::Sort,
        optimized,
        baseline,
        mismatches,
    }
}

fn run_rank_only(config: &HarnessConfig, gen: &DatasetGenerator) -> PhaseReport {
    let n = config.data_size;

    info!("generating {n} ordered floats and queries");
    let (data, query) = gen.rank_workload(n);

    let mut optimized_ranks = vec![0usize; n];
    info!("running optimized phase 2");
    let (optimized, ()) =
        measure(|| Strategy::Optimized.rank_query(&mut optimized_ranks, &data, &query));
    info!(ms = as_millis_f64(optimized), "optimized phase 2 done");

    let (baseline, mismatches) = if config.skip_baseline {
        (None, None)
    } else {
        let mut baseline_ranks = vec![0usize; n];
        info!("running baseline phase 2");
        let (elapsed, ()) =
            measure(|| Strategy::Baseline.rank_query(&mut baseline_ranks, &data, &query));
        info!(ms = as_millis_f64(elapsed), "baseline phase 2 done");

        (
            Some(elapsed),
            Some(count_mismatches(&optimized_ranks, &baseline_ranks)),
        )
    };

    PhaseReport {
        phase: Phase::RankQuery,
        optimized,
        baseline,
        mismatches,
    }
}

/// Output of one strategy over both phases.
struct PassOutput {
    sort_time: Duration,
    rank_time: Duration,
    sorted: Vec<f32>,
    ranks: Vec<usize>,
}

fn run_pass(strategy: Strategy, gen: &DatasetGenerator, n: usize) -> PassOutput {
    info!("generating data for {strategy}");
    let (ordered, query) = gen.rank_workload(n);
    let mut data = DatasetGenerator::new(gen.seed() ^ SHUFFLE_SALT).shuffled(&ordered);
    drop(ordered);

    info!("running {strategy} phase 1");
    let (sort_time, ()) = measure(|| strategy.sort(&mut data));

    info!("running {strategy} phase 2");
    let mut ranks = vec![0usize; n];
    let (rank_time, ()) = measure(|| strategy.rank_query(&mut ranks, &data, &query));

    PassOutput {
        sort_time,
        rank_time,
        sorted: data,
        ranks,
    }
}

fn run_combined(config: &HarnessConfig, gen: &DatasetGenerator, report: &mut HarnessReport) {
    let n = config.data_size;

    let optimized = run_pass(Strategy::Optimized, gen, n);
    report.result_file = dump_or_log(&config.output_dir.join(RESULT_FILE), &optimized.ranks);

    // correct.txt is always produced here; skip_baseline only affects
    // the single-phase modes.
    if config.skip_baseline {
        info!("baseline pass still runs in combined mode");
    }
    let baseline = run_pass(Strategy::Baseline, gen, n);
    report.correct_file = dump_or_log(&config.output_dir.join(CORRECT_FILE), &baseline.ranks);

    report.phases.push(PhaseReport {
        phase: Phase::Sort,
        optimized: optimized.sort_time,
        baseline: Some(baseline.sort_time),
        mismatches: Some(count_mismatches(&optimized.sorted, &baseline.sorted)),
    });
    report.phases.push(PhaseReport {
        phase: Phase::RankQuery,
        optimized: optimized.rank_time,
        baseline: Some(baseline.rank_time),
        mismatches: Some(count_mismatches(&optimized.ranks, &baseline.ranks)),
    });
}

/// Number of positions where `a` and `b` differ.
///
/// Floats compare with `==`, so `-0.0` and `0.0`, which an unstable sort
/// may order either way, count as equal.
pub fn count_mismatches<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn dump_or_log(path: &Path, ranks: &[usize]) -> Option<PathBuf> {
    info!(path = %path.display(), "writing ranks");
    match dump_ranks(path, ranks) {
        Ok(()) => Some(path.to_path_buf()),
        Err(err) => {
            error!(%err, "rank dump failed");
            None
        }
    }
}

/// Write one decimal rank per line, in query order.
///
/// Creates the parent directory if needed.
pub fn dump_ranks(path: &Path, ranks: &[usize]) -> Result<(), BenchError> {
    write_ranks(path, ranks).map_err(|source| BenchError::Dump {
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranks(path: &Path, ranks: &[usize]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    for rank in ranks {
        writeln!(out, "{rank}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sort-rank-harness-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn config(n: usize, dir: &Path) -> HarnessConfig {
        HarnessConfig {
            data_size: n,
            output_dir: dir.to_path_buf(),
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn test_count_mismatches() {
        assert_eq!(count_mismatches(&[1, 2, 3], &[1, 0, 3]), 1);
        assert_eq!(count_mismatches::<f32>(&[-0.0, 1.0], &[0.0, 1.0]), 0);
        assert_eq!(count_mismatches::<usize>(&[], &[]), 0);
    }

    #[test]
    fn test_dump_ranks_format() {
        let dir = temp_dir("dump");
        let path = dir.join("nested").join("ranks.txt");
        dump_ranks(&path, &[0, 3, 12]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0\n3\n12\n");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_dump_ranks_error_carries_path() {
        let dir = temp_dir("dump-err");
        fs::create_dir_all(&dir).unwrap();
        // A directory cannot be opened as a file
        let err = dump_ranks(&dir, &[1]).unwrap_err();
        assert!(matches!(err, BenchError::Dump { ref path, .. } if path == &dir));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_combined_mode_dumps_identical_ranks() {
        let dir = temp_dir("both");
        let report = run(&config(5000, &dir));

        assert_eq!(report.mode, RunMode::Both);
        assert_eq!(report.phases.len(), 2);
        assert!(report.is_consistent());
        assert!(report.total_speedup().is_some());

        let result = fs::read_to_string(report.result_file.as_ref().unwrap()).unwrap();
        let correct = fs::read_to_string(report.correct_file.as_ref().unwrap()).unwrap();
        assert_eq!(result.lines().count(), 5000);
        assert_eq!(result, correct);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_combined_mode_ignores_skip_baseline() {
        let dir = temp_dir("skip");
        let cfg = HarnessConfig {
            skip_baseline: true,
            ..config(300, &dir)
        };
        let report = run(&cfg);

        assert_eq!(report.mode, RunMode::Both);
        assert!(dir.join(RESULT_FILE).exists());
        assert!(dir.join(CORRECT_FILE).exists());
        assert_eq!(report.correct_file.as_deref(), Some(dir.join(CORRECT_FILE).as_path()));
        assert!(report.phases.iter().all(|p| p.baseline.is_some()));
        assert_eq!(report.total_mismatches(), Some(0));

        let result = fs::read_to_string(dir.join(RESULT_FILE)).unwrap();
        let correct = fs::read_to_string(dir.join(CORRECT_FILE)).unwrap();
        assert_eq!(result, correct);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_single_phase_modes() {
        let dir = temp_dir("single");

        let sort_only = run(&HarnessConfig {
            skip_phase2: true,
            ..config(2000, &dir)
        });
        assert_eq!(sort_only.mode, RunMode::Phase1Only);
        assert_eq!(sort_only.phases.len(), 1);
        assert_eq!(sort_only.phases[0].phase, Phase::Sort);
        assert_eq!(sort_only.phases[0].mismatches, Some(0));

        let rank_only = run(&HarnessConfig {
            skip_phase1: true,
            ..config(2000, &dir)
        });
        assert_eq!(rank_only.mode, RunMode::Phase2Only);
        assert_eq!(rank_only.phases[0].phase, Phase::RankQuery);
        assert_eq!(rank_only.phases[0].mismatches, Some(0));

        // Single-phase modes never dump
        assert!(rank_only.result_file.is_none());
        assert!(!dir.join(RESULT_FILE).exists());
    }

    #[test]
    fn test_empty_dataset_is_a_no_op() {
        let dir = temp_dir("empty");
        let report = run(&config(0, &dir));
        assert!(report.is_consistent());
        let result = fs::read_to_string(dir.join(RESULT_FILE)).unwrap();
        assert!(result.is_empty());
        fs::remove_dir_all(&dir).ok();
    }
}
