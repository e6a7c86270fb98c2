use knapsack_rs::entities::Instance;
use knapsack_rs::solvers::Algorithm;
use knapsack_rs::solvers::dp::MAX_CAPACITY;
use knapsack_rs::util::assertions::selection_is_feasible;
use log::{debug, warn};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::time::TimeStamp;

/// Result of a single algorithm on a single instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmOutcome {
    pub algorithm: Algorithm,
    /// Total value of the items packed by the algorithm
    pub value: u64,
    /// Wall-clock time spent in the algorithm
    pub time_secs: f64,
    /// `value` divided by the optimal value, 1.0 means optimal
    pub quality: f64,
}

/// Result of all algorithms on a single instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// The optimal value the qualities were computed against
    pub optimal_value: u64,
    pub n_items: usize,
    pub capacity: u64,
    /// One outcome per algorithm, in the order of [`Algorithm::ALL`]
    pub outcomes: Vec<AlgorithmOutcome>,
}

impl EvaluationResult {
    pub fn outcome(&self, algorithm: Algorithm) -> Option<&AlgorithmOutcome> {
        self.outcomes.iter().find(|o| o.algorithm == algorithm)
    }
}

/// Runs every algorithm on an instance and scores it against a known optimal value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    pub config: BenchConfig,
}

impl Evaluator {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Evaluates instance `name`. Fails if `optimal_value` is zero, if the capacity exceeds
    /// [`BenchConfig::max_capacity`] or if the item values sum past `u64::MAX`.
    pub fn evaluate(
        &self,
        name: &str,
        instance: &Instance,
        optimal_value: u64,
    ) -> Result<EvaluationResult, BenchError> {
        if optimal_value == 0 {
            return Err(BenchError::DivisionByZero {
                instance: name.to_string(),
            });
        }
        let limit = self.config.max_capacity.min(MAX_CAPACITY);
        if instance.capacity > limit {
            return Err(BenchError::CapacityLimit {
                instance: name.to_string(),
                capacity: instance.capacity,
                limit,
            });
        }
        if instance.total_value().is_none() {
            return Err(BenchError::ValueOverflow {
                instance: name.to_string(),
            });
        }

        let outcomes = Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let start = TimeStamp::now();
                let value = algorithm.solve(instance.capacity, &instance.items);
                let end = TimeStamp::now();

                let outcome = AlgorithmOutcome {
                    algorithm,
                    value,
                    time_secs: TimeStamp::since_secs(&start, &end),
                    quality: value as f64 / optimal_value as f64,
                };
                debug!(
                    "[EVAL] {name}: {algorithm} found {value} in {:.6}s (quality {:.6})",
                    outcome.time_secs, outcome.quality
                );
                // the exact selection table is too large to rebuild for every instance
                debug_assert!(
                    algorithm.is_exact()
                        || selection_is_feasible(
                            instance,
                            &algorithm.select(instance.capacity, &instance.items)
                        )
                );
                if self.config.cross_check_exact && algorithm.is_exact() && value != optimal_value
                {
                    warn!(
                        "[EVAL] {name}: exact solution value {value} differs from the supplied optimal value {optimal_value}"
                    );
                }
                outcome
            })
            .collect();

        Ok(EvaluationResult {
            optimal_value,
            n_items: instance.n_items(),
            capacity: instance.capacity,
            outcomes,
        })
    }
}
