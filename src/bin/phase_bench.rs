//! Phase harness: time the baseline and optimized strategies on one large
//! workload, configured entirely from `HEP_*` environment variables.
//!
//! Usage:
//!   phase-bench                         # both phases, N = 20030601
//!   HEP_DATA_SIZE=1000000 phase-bench   # smaller workload
//!   HEP_SKIP_PHASE1=1 phase-bench       # rank queries only
//!   HEP_SKIP_PHASE2=1 HEP_SKIP_BASELINE=1 phase-bench   # optimized sort only
//!
//! Always exits with status 0.

use tracing::info;

use sort_rank_bench::config::HarnessConfig;
use sort_rank_bench::harness;
use sort_rank_bench::tracing_setup::{init_subscriber, Verbosity};
use sort_rank_bench::tui;

fn main() {
    init_subscriber(Verbosity::Normal);

    let config = HarnessConfig::from_env();
    info!(
        mode = ?config.mode(),
        n = config.data_size,
        seed = config.seed,
        skip_baseline = config.skip_baseline,
        "starting phase harness"
    );

    let report = harness::run(&config);
    tui::print_harness_report(&report);
}
