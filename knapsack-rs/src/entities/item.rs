/// Item that can be put into the knapsack at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub value: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(value: u64, weight: u64) -> Item {
        Item { value, weight }
    }

    /// Value per unit of weight.
    /// Weightless items are infinitely profitable, unless they are also worthless, then the ratio is 0.
    pub fn ratio(&self) -> f64 {
        match (self.value, self.weight) {
            (0, 0) => 0.0,
            (_, 0) => f64::INFINITY,
            (v, w) => v as f64 / w as f64,
        }
    }
}

impl From<(u64, u64)> for Item {
    fn from((value, weight): (u64, u64)) -> Self {
        Item::new(value, weight)
    }
}
