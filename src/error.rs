//! Error types for configuration, result dumping and verification.
//!
//! The strategies themselves never fail; everything here belongs to the
//! harness around them.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// A configuration value that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a boolean (expected an integer, true/false, yes/no, on/off)")]
    InvalidFlag { key: &'static str, value: String },

    #[error("{key}={value:?} is not an unsigned size: {source}")]
    InvalidSize {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{key}={value:?} is not a seed (expected decimal or 0x-prefixed hex)")]
    InvalidSeed { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to write ranks to {}: {source}", path.display())]
    Dump {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to export CSV to {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("variant '{variant}' of '{algorithm}' diverged from the reference: {detail}")]
    Verification {
        algorithm: &'static str,
        variant: &'static str,
        detail: String,
    },
}
