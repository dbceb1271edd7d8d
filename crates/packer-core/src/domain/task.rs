use super::Item;

/// A single packing problem: a weight capacity and the items to choose from.
///
/// Item order matters only to solvers: position `j` is the bit that encodes
/// the item in a subset mask.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    capacity: f64,
    items: Vec<Item>,
}

impl Task {
    /// Creates a task from its capacity and items.
    pub fn new(capacity: f64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Maximum total weight of a package built for this task.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
