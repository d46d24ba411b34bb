//! Harness configuration, read once from the environment at startup.
//!
//! | Variable            | Default      |
//! |---------------------|--------------|
//! | `HEP_SKIP_BASELINE` | `0`          |
//! | `HEP_SKIP_PHASE1`   | `0`          |
//! | `HEP_SKIP_PHASE2`   | `0`          |
//! | `HEP_DATA_SIZE`     | `20030601`   |
//! | `HEP_SEED`          | `0x20030601` |
//! | `HEP_OUTPUT_DIR`    | `.`          |
//!
//! An unparsable value is reported as a warning and the default is kept.

use std::path::PathBuf;

use crate::dataset::DEFAULT_SEED;
use crate::error::ConfigError;

pub const ENV_SKIP_BASELINE: &str = "HEP_SKIP_BASELINE";
pub const ENV_SKIP_PHASE1: &str = "HEP_SKIP_PHASE1";
pub const ENV_SKIP_PHASE2: &str = "HEP_SKIP_PHASE2";
pub const ENV_DATA_SIZE: &str = "HEP_DATA_SIZE";
pub const ENV_SEED: &str = "HEP_SEED";
pub const ENV_OUTPUT_DIR: &str = "HEP_OUTPUT_DIR";

pub const DEFAULT_DATA_SIZE: usize = 20_030_601;

/// Which phases a harness run executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Phase1Only,
    Phase2Only,
    Both,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Time only the optimized strategies
    pub skip_baseline: bool,
    pub skip_phase1: bool,
    pub skip_phase2: bool,
    /// Number of elements N in every array
    pub data_size: usize,
    pub seed: u64,
    /// Directory receiving `result.txt` and `correct.txt`
    pub output_dir: PathBuf,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            skip_baseline: false,
            skip_phase1: false,
            skip_phase2: false,
            data_size: DEFAULT_DATA_SIZE,
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("."),
        }
    }
}

impl HarnessConfig {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &'static str| lookup(key).map(|raw| parse_flag(key, &raw));

        let config = Self {
            skip_baseline: keep_or_warn(flag(ENV_SKIP_BASELINE), defaults.skip_baseline),
            skip_phase1: keep_or_warn(flag(ENV_SKIP_PHASE1), defaults.skip_phase1),
            skip_phase2: keep_or_warn(flag(ENV_SKIP_PHASE2), defaults.skip_phase2),
            data_size: keep_or_warn(
                lookup(ENV_DATA_SIZE).map(|raw| parse_size(ENV_DATA_SIZE, &raw)),
                defaults.data_size,
            ),
            seed: keep_or_warn(
                lookup(ENV_SEED).map(|raw| parse_seed(ENV_SEED, &raw)),
                defaults.seed,
            ),
            output_dir: lookup(ENV_OUTPUT_DIR)
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        };

        tracing::debug!(?config, "harness configuration loaded");
        config
    }

    pub fn mode(&self) -> RunMode {
        if self.skip_phase1 {
            RunMode::Phase2Only
        } else if self.skip_phase2 {
            RunMode::Phase1Only
        } else {
            RunMode::Both
        }
    }
}

fn keep_or_warn<T>(parsed: Option<Result<T, ConfigError>>, default: T) -> T {
    match parsed {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            tracing::warn!(%err, "ignoring invalid configuration value, keeping default");
            default
        }
    }
}

/// Parse a boolean switch. Any integer counts, non-zero meaning true.
pub fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    let lowered = raw.trim().to_ascii_lowercase();
    if let Ok(number) = lowered.parse::<i64>() {
        return Ok(number != 0);
    }
    match lowered.as_str() {
        "true" | "yes" | "on" => Ok(true),
        "" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Parse an element count; `_` separators are accepted.
pub fn parse_size(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    let cleaned: String = raw.trim().chars().filter(|&c| c != '_').collect();
    cleaned
        .parse::<usize>()
        .map_err(|source| ConfigError::InvalidSize {
            key,
            value: raw.to_string(),
            source,
        })
}

/// Parse a seed as decimal or `0x`-prefixed hex.
pub fn parse_seed(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| ConfigError::InvalidSeed {
        key,
        value: raw.to_string(),
    })
}
