use itertools::Itertools;
use knapsack_rs::solvers::Algorithm;

use crate::eval::EvaluationResult;

pub const EMPTY_NOTICE: &str = "Nothing to display.";
pub const SEPARATOR_WIDTH: usize = 80;

/// Renders one row per (instance, algorithm) pair.
pub fn render_table(results: &[(String, EvaluationResult)]) -> String {
    if results.is_empty() {
        return format!("{EMPTY_NOTICE}\n");
    }
    let separator = "=".repeat(SEPARATOR_WIDTH);

    let header = format!(
        "{:<30} {:<25} {:<15} {}",
        "File", "Algorithm", "Time (s)", "Solution Quality"
    );
    let rows = results.iter().flat_map(|(name, result)| {
        result.outcomes.iter().map(move |o| {
            format!(
                "{:<30} {:<25} {:<15.6} {:.6}",
                name,
                o.algorithm.label(),
                o.time_secs,
                o.quality
            )
        })
    });

    [header, separator.clone()]
        .into_iter()
        .chain(rows)
        .chain([separator])
        .map(|line| line + "\n")
        .collect()
}

/// Aggregated outcomes of one algorithm over all evaluated instances.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    pub n_instances: usize,
    pub mean_quality: f64,
    pub min_quality: f64,
    pub total_time_secs: f64,
    /// Number of instances on which the optimal value was reached
    pub n_optimal: usize,
}

pub fn summarize(results: &[(String, EvaluationResult)]) -> Vec<AlgorithmSummary> {
    Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let outcomes = results
                .iter()
                .filter_map(|(_, r)| r.outcome(algorithm).map(|o| (o, r.optimal_value)))
                .collect_vec();
            if outcomes.is_empty() {
                return None;
            }
            let n_instances = outcomes.len();
            Some(AlgorithmSummary {
                algorithm,
                n_instances,
                mean_quality: outcomes.iter().map(|(o, _)| o.quality).sum::<f64>()
                    / n_instances as f64,
                min_quality: outcomes
                    .iter()
                    .map(|(o, _)| o.quality)
                    .fold(f64::INFINITY, f64::min),
                total_time_secs: outcomes.iter().map(|(o, _)| o.time_secs).sum(),
                n_optimal: outcomes.iter().filter(|(o, opt)| o.value == *opt).count(),
            })
        })
        .collect()
}

pub fn render_summary(summaries: &[AlgorithmSummary]) -> String {
    if summaries.is_empty() {
        return String::new();
    }
    let header = format!(
        "{:<25} {:<15} {:<15} {:<15} {}",
        "Algorithm", "Mean Quality", "Min Quality", "Total Time (s)", "Optimal"
    );
    let rows = summaries.iter().map(|s| {
        format!(
            "{:<25} {:<15.6} {:<15.6} {:<15.6} {}/{}",
            s.algorithm.label(),
            s.mean_quality,
            s.min_quality,
            s.total_time_secs,
            s.n_optimal,
            s.n_instances
        )
    });

    [header, "-".repeat(SEPARATOR_WIDTH)]
        .into_iter()
        .chain(rows)
        .map(|line| line + "\n")
        .collect()
}
