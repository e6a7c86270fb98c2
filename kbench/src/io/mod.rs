use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Result;
use knapsack_rs::entities::Instance;
use knapsack_rs::io::parse_instance;
use log::{LevelFilter, debug, info, warn};
use serde::de::DeserializeOwned;
use thousands::Separable;

use crate::EPOCH;
use crate::error::BenchError;

pub mod cli;

/// Reads and parses an instance file.
pub fn read_instance(path: &Path) -> Result<Instance, BenchError> {
    let content = fs::read_to_string(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let instance = parse_instance(&content).map_err(|source| BenchError::MalformedInstance {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "[LOAD] {}: {} items, capacity {}",
        path.display(),
        instance.n_items().separate_with_commas(),
        instance.capacity.separate_with_commas()
    );
    Ok(instance)
}

/// Same as [`read_instance`], but reports the failure and returns `None` instead of an error,
/// so a single bad file does not interrupt a batch.
pub fn load_instance(path: &Path) -> Option<Instance> {
    match read_instance(path) {
        Ok(instance) => Some(instance),
        Err(err) => {
            warn!("[LOAD] skipping instance, {err}");
            None
        }
    }
}

/// Deserializes a JSON file, used for both the [`BenchConfig`](crate::config::BenchConfig)
/// and the [`OptimalValueTable`](crate::optimal::OptimalValueTable).
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BenchError> {
    let file = File::open(path).map_err(|source| BenchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| BenchError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Logs to stdout, every line prefixed with its level and the time elapsed since [`EPOCH`].
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed();
            let secs = elapsed.as_secs();
            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}.{:0>3}]",
                record.level(),
                secs / 3600,
                (secs / 60) % 60,
                secs % 60,
                elapsed.subsec_millis()
            );
            out.finish(format_args!("{prefix:<24}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] started at {}", jiff::Timestamp::now());
    Ok(())
}
