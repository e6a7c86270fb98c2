use crate::entities::{Item, Selection};

/// Largest capacity for which a table of `capacity + 1` values can be addressed on this platform.
/// Whether it can actually be allocated depends on the available memory.
pub const MAX_CAPACITY: u64 = (isize::MAX as usize / size_of::<u64>() - 1) as u64;

/// Solves the instance to optimality using a single row of `capacity + 1` entries.
/// Entry `w` holds the best value achievable with a total weight of at most `w`.
/// Capacities are updated in descending order so every item is used at most once.
///
/// Panics if `capacity` exceeds [`MAX_CAPACITY`] or the item values sum past `u64::MAX`,
/// [`parse_instance`](crate::io::parse_instance) rejects both.
pub fn solve(capacity: u64, items: &[Item]) -> u64 {
    let capacity = table_index(capacity);
    let mut dp = vec![0u64; capacity + 1];
    for item in items {
        let Some(weight) = weight_within(item, capacity) else {
            continue;
        };
        for w in (weight..=capacity).rev() {
            dp[w] = dp[w].max(dp[w - weight] + item.value);
        }
    }
    dp[capacity]
}

/// Same as [`solve`], but also reconstructs which items make up the optimum.
/// Keeps a decision bit for every (item, capacity) pair, so memory grows with `n_items * capacity`.
pub fn selection(capacity: u64, items: &[Item]) -> Selection {
    let capacity = table_index(capacity);
    let width = capacity + 1;
    let mut dp = vec![0u64; width];
    let mut taken = vec![false; items.len() * width];

    for (i, item) in items.iter().enumerate() {
        let Some(weight) = weight_within(item, capacity) else {
            continue;
        };
        for w in (weight..=capacity).rev() {
            let with_item = dp[w - weight] + item.value;
            if with_item > dp[w] {
                dp[w] = with_item;
                taken[i * width + w] = true;
            }
        }
    }

    let mut item_ids = vec![];
    let mut w = capacity;
    for i in (0..items.len()).rev() {
        if taken[i * width + w] {
            item_ids.push(i);
            w -= items[i].weight as usize;
        }
    }

    let mut selection = Selection::new();
    for id in item_ids.into_iter().rev() {
        selection.push(id, &items[id]);
    }
    debug_assert_eq!(selection.total_value, dp[capacity]);
    selection
}

fn table_index(capacity: u64) -> usize {
    assert!(
        capacity <= MAX_CAPACITY,
        "capacity {capacity} exceeds the largest addressable table"
    );
    capacity as usize
}

/// The weight of the item as a table offset, if the item fits in an empty knapsack.
fn weight_within(item: &Item, capacity: usize) -> Option<usize> {
    usize::try_from(item.weight).ok().filter(|&w| w <= capacity)
}
