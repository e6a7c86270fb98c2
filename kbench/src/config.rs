use serde::{Deserialize, Serialize};

/// 800 MB of exact solver table
pub const DEFAULT_MAX_CAPACITY: u64 = 100_000_000;

/// Configuration for a benchmark run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct BenchConfig {
    /// Warn when the exact solver disagrees with the supplied optimal value
    pub cross_check_exact: bool,
    /// Append a per-algorithm summary to the report
    pub summary: bool,
    /// Instances with a larger capacity are skipped, the exact solver allocates `8 * (capacity + 1)` bytes
    pub max_capacity: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            cross_check_exact: true,
            summary: true,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}
