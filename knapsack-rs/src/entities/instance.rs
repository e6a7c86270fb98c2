use crate::entities::Item;

/// The static (unmodifiable) representation of a 0/1 knapsack problem instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    /// Maximum total weight the knapsack can hold
    pub capacity: u64,
    /// Items in the order they were defined in the input
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(capacity: u64, items: Vec<Item>) -> Instance {
        Instance { capacity, items }
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    /// Sum of all item values, `None` if it does not fit in a `u64`.
    /// Every partial sum a solver computes is bounded by this total.
    pub fn total_value(&self) -> Option<u64> {
        self.items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.value))
    }
}
