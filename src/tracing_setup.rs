//! Tracing subscriber initialization for the binaries.
//!
//! Progress and diagnostics go to stderr as `tracing` events; the report
//! tables stay on stdout so they can be redirected on their own.
//!
//! # Priority (highest to lowest)
//!
//! 1. `HEP_LOG` env var (directives, e.g. `sort_rank_bench=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. Level derived from CLI flags (`-v` → debug, `-q` → error)
//! 4. Default level: `info`

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Project-specific filter variable, checked before `RUST_LOG`.
pub const ENV_LOG: &str = "HEP_LOG";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Progress messages and above.
    #[default]
    Normal,
    /// Per-variant debug output.
    Verbose,
}

impl Verbosity {
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Calling it again once a subscriber is set is a no-op.
pub fn init_subscriber(verbosity: Verbosity) {
    let filter = build_env_filter(verbosity);
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(verbosity == Verbosity::Verbose)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// `HEP_LOG` > `RUST_LOG` > verbosity default. Unparseable directives fall
/// through to the next source.
fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var(ENV_LOG) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(verbosity.default_level().as_str())
}
