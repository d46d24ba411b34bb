//! Timings and cross-check results of one harness run.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::RunMode;
use crate::utils::bench::speedup;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Sort,
    RankQuery,
}

impl Phase {
    pub fn title(self) -> &'static str {
        match self {
            Phase::Sort => "PHASE 1",
            Phase::RankQuery => "PHASE 2",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Sort => "sort",
            Phase::RankQuery => "rank query",
        })
    }
}

/// Timing of one phase under both strategies.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseReport {
    pub phase: Phase,
    pub optimized: Duration,
    /// `None` when the baseline was skipped
    pub baseline: Option<Duration>,
    /// Positions where the two strategies disagree; `None` without a baseline
    pub mismatches: Option<usize>,
}

impl PhaseReport {
    /// `baseline / optimized`
    pub fn speedup(&self) -> Option<f64> {
        self.baseline.map(|b| speedup(b, self.optimized))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HarnessReport {
    pub mode: RunMode,
    pub data_size: usize,
    pub seed: u64,
    pub phases: Vec<PhaseReport>,
    /// Optimized ranks, written in combined mode
    pub result_file: Option<PathBuf>,
    /// Baseline ranks, written in combined mode
    pub correct_file: Option<PathBuf>,
}

impl HarnessReport {
    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    pub fn total_optimized(&self) -> Duration {
        self.phases.iter().map(|p| p.optimized).sum()
    }

    /// Sum of baseline times, if every phase ran one.
    pub fn total_baseline(&self) -> Option<Duration> {
        self.phases.iter().map(|p| p.baseline).sum()
    }

    pub fn total_speedup(&self) -> Option<f64> {
        self.total_baseline()
            .map(|b| speedup(b, self.total_optimized()))
    }

    pub fn total_mismatches(&self) -> Option<usize> {
        self.phases.iter().map(|p| p.mismatches).sum()
    }

    /// Both strategies produced identical output in every phase that ran both.
    pub fn is_consistent(&self) -> bool {
        self.phases
            .iter()
            .all(|p| p.mismatches.map_or(true, |m| m == 0))
    }
}
