use super::Item;

/// The items chosen for one task.
///
/// Items keep the positional order of the task they came from. An empty
/// package is a valid result: nothing fits, or nothing is worth packing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    items: Vec<Item>,
}

impl Package {
    /// Creates a package holding the given items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Creates a package with no items.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item indices in package order.
    pub fn indices(&self) -> Vec<u32> {
        self.items.iter().map(Item::index).collect()
    }

    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(Item::cost).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
