use crate::entities::Item;

/// A subset of the items of an instance, as chosen by a solver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Indices of the chosen items, in the order they were picked
    pub item_ids: Vec<usize>,
    pub total_value: u64,
    pub total_weight: u64,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    /// Adds the item with index `id` to the selection.
    pub fn push(&mut self, id: usize, item: &Item) {
        self.item_ids.push(id);
        self.total_value += item.value;
        self.total_weight += item.weight;
    }
}
