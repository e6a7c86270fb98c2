use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Known optimal values, keyed by the exact file name of the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimalValueTable(BTreeMap<String, u64>);

impl OptimalValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Optimal values of the `knapPI_<class>_<n>_1000_1` large scale instances by D. Pisinger:
    /// classes 1 (uncorrelated), 2 (weakly correlated) and 3 (strongly correlated).
    pub fn pisinger_large_scale() -> Self {
        [
            ("knapPI_1_100_1000_1", 9147),
            ("knapPI_1_200_1000_1", 11238),
            ("knapPI_1_500_1000_1", 28857),
            ("knapPI_1_1000_1000_1", 54503),
            ("knapPI_1_2000_1000_1", 110625),
            ("knapPI_1_5000_1000_1", 276457),
            ("knapPI_1_10000_1000_1", 563647),
            ("knapPI_2_100_1000_1", 1514),
            ("knapPI_2_200_1000_1", 1634),
            ("knapPI_2_500_1000_1", 4566),
            ("knapPI_2_1000_1000_1", 9052),
            ("knapPI_2_2000_1000_1", 18051),
            ("knapPI_2_5000_1000_1", 44356),
            ("knapPI_2_10000_1000_1", 90204),
            ("knapPI_3_100_1000_1", 2397),
            ("knapPI_3_200_1000_1", 2697),
            ("knapPI_3_500_1000_1", 7117),
            ("knapPI_3_1000_1000_1", 14390),
            ("knapPI_3_2000_1000_1", 28919),
            ("knapPI_3_5000_1000_1", 72505),
            ("knapPI_3_10000_1000_1", 146919),
        ]
        .into_iter()
        .collect()
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Instance names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for OptimalValueTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
