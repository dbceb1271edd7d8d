/// One candidate that may be packed.
///
/// The index identifies the item in rendered output; it is taken from the
/// input and need not be contiguous or sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    index: u32,
    weight: f64,
    cost: f64,
}

impl Item {
    /// Creates an item.
    pub fn new(index: u32, weight: f64, cost: f64) -> Self {
        Self {
            index,
            weight,
            cost,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}
