use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::{debug, info, warn};
use thousands::Separable;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::eval::{EvaluationResult, Evaluator};
use crate::io;
use crate::optimal::OptimalValueTable;
use crate::time::TimeStamp;

/// Evaluates every instance in a directory for which an optimal value is known.
pub struct BatchRunner {
    pub evaluator: Evaluator,
    pub optimal_values: OptimalValueTable,
}

impl BatchRunner {
    pub fn new(config: BenchConfig, optimal_values: OptimalValueTable) -> Self {
        Self {
            evaluator: Evaluator::new(config),
            optimal_values,
        }
    }

    /// Processes the files of `dir` in lexicographic order of their names.
    /// Files without a known optimal value are ignored, files which fail to load or evaluate are skipped.
    /// Only fails if the directory itself cannot be listed.
    pub fn run(&self, dir: &Path) -> Result<Vec<(String, EvaluationResult)>, BenchError> {
        let start = TimeStamp::now();
        let names = list_file_names(dir)?;

        let mut results = vec![];
        for name in &names {
            let Some(optimal_value) = self.optimal_values.get(name) else {
                debug!("[BATCH] no optimal value known for {name}, ignoring");
                continue;
            };
            let Some(instance) = io::load_instance(&dir.join(name)) else {
                continue;
            };
            match self.evaluator.evaluate(name, &instance, optimal_value) {
                Ok(result) => results.push((name.clone(), result)),
                Err(err) => warn!("[BATCH] skipping instance, {err}"),
            }
        }

        let missing = self
            .optimal_values
            .names()
            .filter(|name| !names.contains(*name))
            .collect_vec();
        if !missing.is_empty() {
            info!(
                "[BATCH] {} instances with a known optimal value are not present in {}: {}",
                missing.len(),
                dir.display(),
                missing.join(", ")
            );
        }

        info!(
            "[BATCH] evaluated {} of {} files in {:.3}s",
            results.len().separate_with_commas(),
            names.len().separate_with_commas(),
            start.elapsed_secs()
        );
        Ok(results)
    }
}

/// Names of all entries of `dir`, sorted. Names which are not valid UTF-8 are skipped.
fn list_file_names(dir: &Path) -> Result<BTreeSet<String>, BenchError> {
    let io_err = |source| BenchError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        match entry.map_err(io_err)?.file_name().into_string() {
            Ok(name) => {
                names.insert(name);
            }
            Err(name) => warn!("[BATCH] ignoring file with non UTF-8 name: {name:?}"),
        }
    }
    Ok(names)
}
