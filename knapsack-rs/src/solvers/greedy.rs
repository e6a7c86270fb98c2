//! Both heuristics walk the items in a fixed order and stop at the first item that no longer fits.
//! Smaller items further down the order are never tried, this is what distinguishes them
//! from the textbook greedy heuristic which skips the item and continues.

use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::{Item, Selection};

/// Fills the knapsack with the lightest items first. Returns the total value.
pub fn smallest_weight(capacity: u64, items: &[Item]) -> u64 {
    fill_until_overflow(capacity, items, smallest_weight_order(items)).total_value
}

/// Fills the knapsack with the items with the highest value/weight ratio first. Returns the total value.
pub fn best_ratio(capacity: u64, items: &[Item]) -> u64 {
    fill_until_overflow(capacity, items, best_ratio_order(items)).total_value
}

pub fn smallest_weight_selection(capacity: u64, items: &[Item]) -> Selection {
    fill_until_overflow(capacity, items, smallest_weight_order(items))
}

pub fn best_ratio_selection(capacity: u64, items: &[Item]) -> Selection {
    fill_until_overflow(capacity, items, best_ratio_order(items))
}

/// Item indices by ascending weight, ties keep their input order
fn smallest_weight_order(items: &[Item]) -> Vec<usize> {
    (0..items.len()).sorted_by_key(|&i| items[i].weight).collect()
}

/// Item indices by descending value/weight ratio, ties keep their input order
fn best_ratio_order(items: &[Item]) -> Vec<usize> {
    (0..items.len())
        .sorted_by_cached_key(|&i| Reverse(OrderedFloat(items[i].ratio())))
        .collect()
}

fn fill_until_overflow(capacity: u64, items: &[Item], order: Vec<usize>) -> Selection {
    let mut selection = Selection::new();
    for id in order {
        let item = &items[id];
        let fits = selection
            .total_weight
            .checked_add(item.weight)
            .is_some_and(|w| w <= capacity);
        if fits {
            selection.push(id, item);
        } else {
            break;
        }
    }
    debug_assert!(selection.total_weight <= capacity);
    selection
}
