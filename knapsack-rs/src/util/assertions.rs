use itertools::Itertools;
use log::error;

use crate::entities::{Instance, Selection};

//Various checks to verify correctness of solutions
//Used in debug_assert!() blocks and tests

pub fn selection_is_feasible(instance: &Instance, selection: &Selection) -> bool {
    let weight = selection
        .item_ids
        .iter()
        .map(|&id| instance.item(id).weight)
        .sum::<u64>();
    if weight > instance.capacity {
        error!(
            "selection weighs {} but the capacity is {}",
            weight, instance.capacity
        );
        return false;
    }
    true
}

pub fn selection_matches_items(instance: &Instance, selection: &Selection) -> bool {
    if let Some(id) = selection.item_ids.iter().find(|&&id| id >= instance.n_items()) {
        error!("selection contains unknown item {}", id);
        return false;
    }
    if !selection.item_ids.iter().all_unique() {
        error!("selection contains duplicate items: {:?}", selection.item_ids);
        return false;
    }
    let (value, weight) = selection
        .item_ids
        .iter()
        .map(|&id| instance.item(id))
        .fold((0, 0), |(v, w), item| (v + item.value, w + item.weight));

    value == selection.total_value && weight == selection.total_weight
}
