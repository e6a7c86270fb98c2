use std::fmt::{Display, Formatter};

use crate::entities::{Item, Selection};

/// Exact solver based on dynamic programming over the capacity dimension
pub mod dp;

/// Greedy heuristics which fill the knapsack in a fixed item order
pub mod greedy;

/// The algorithms which are benchmarked against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Lightest items first, see [`greedy::smallest_weight`]
    GreedySmallestWeight,
    /// Most valuable items per unit of weight first, see [`greedy::best_ratio`]
    GreedyBestRatio,
    /// Exact, see [`dp::solve`]
    DynamicProgramming,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::GreedySmallestWeight,
        Algorithm::GreedyBestRatio,
        Algorithm::DynamicProgramming,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::GreedySmallestWeight => "Greedy Smallest Weight",
            Algorithm::GreedyBestRatio => "Greedy Best Ratio",
            Algorithm::DynamicProgramming => "Dynamic Programming",
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Algorithm::DynamicProgramming)
    }

    /// Best total value the algorithm finds without exceeding `capacity`.
    pub fn solve(&self, capacity: u64, items: &[Item]) -> u64 {
        match self {
            Algorithm::GreedySmallestWeight => greedy::smallest_weight(capacity, items),
            Algorithm::GreedyBestRatio => greedy::best_ratio(capacity, items),
            Algorithm::DynamicProgramming => dp::solve(capacity, items),
        }
    }

    /// The subset of items behind the value returned by [`Algorithm::solve`].
    pub fn select(&self, capacity: u64, items: &[Item]) -> Selection {
        match self {
            Algorithm::GreedySmallestWeight => greedy::smallest_weight_selection(capacity, items),
            Algorithm::GreedyBestRatio => greedy::best_ratio_selection(capacity, items),
            Algorithm::DynamicProgramming => dp::selection(capacity, items),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
