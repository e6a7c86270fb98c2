use crate::entities::Item;

/// Largest number of items [`optimum`] accepts (2^20 subsets).
pub const MAX_ITEMS: usize = 20;

/// Best total value over all subsets of `items` which fit in `capacity`.
pub fn optimum(capacity: u64, items: &[Item]) -> u64 {
    assert!(
        items.len() <= MAX_ITEMS,
        "exhaustive search is limited to {MAX_ITEMS} items, got {}",
        items.len()
    );
    (0u32..1 << items.len())
        .filter_map(|mask| {
            let (value, weight) = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .fold((0u64, 0u64), |(v, w), (_, item)| {
                    (v + item.value, w + item.weight)
                });
            (weight <= capacity).then_some(value)
        })
        .max()
        .unwrap_or(0)
}
