//! Error types of the benchmark harness.

use std::path::PathBuf;

use knapsack_rs::io::ParseError;
use thiserror::Error;

/// Errors that can occur while loading, evaluating or configuring a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("malformed instance {}: {source}", path.display())]
    MalformedInstance {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("optimal value of {instance} is zero, quality ratios are undefined")]
    DivisionByZero { instance: String },

    #[error("capacity {capacity} of {instance} exceeds the configured limit of {limit}")]
    CapacityLimit {
        instance: String,
        capacity: u64,
        limit: u64,
    },

    #[error("item values of {instance} sum to more than {}", u64::MAX)]
    ValueOverflow { instance: String },

    #[error("could not parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
