//! Exact solver enumerating every subset of a task's items.
//!
//! A subset is a bit mask: bit `j` set means the item at position `j` is
//! packed. Masks run from `1` to `2^n - 1`, so a task of `n` items costs
//! `2^n - 1` subset evaluations and `n` is capped at [`MAX_ITEMS`].
//!
//! A subset qualifies when its total weight is at most the capacity. The
//! best qualifying subset has the highest total cost; equal costs (exact
//! float equality) go to the lighter subset, and full ties keep the subset
//! with the lowest mask.

use packer_core::{Item, Package, PackerError, Result, Task};
use tracing::{debug, trace};

use super::PackSolver;

/// Largest item count the exhaustive search accepts.
pub const MAX_ITEMS: usize = 15;

type Mask = u16;

/// Exhaustive 0/1 knapsack solver for tasks of up to [`MAX_ITEMS`] items.
///
/// # Example
///
/// ```
/// use packer_core::{Item, Task};
/// use packer_solver::{BruteForceSolver, PackSolver};
///
/// let task = Task::new(10.0, vec![Item::new(1, 6.0, 30.0), Item::new(2, 5.0, 20.0), Item::new(3, 4.0, 15.0)]);
/// let package = BruteForceSolver.solve(&task).unwrap();
///
/// assert_eq!(package.indices(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    pub fn new() -> Self {
        Self
    }
}

/// Best subset seen so far. Starts as the empty subset with infinite weight
/// so the first qualifying subset of equal (zero) cost replaces it.
#[derive(Debug, Clone, Copy)]
struct Best {
    mask: Mask,
    cost: f64,
    weight: f64,
}

impl Best {
    fn empty() -> Self {
        Self {
            mask: 0,
            cost: 0.0,
            weight: f64::INFINITY,
        }
    }

    fn is_improved_by(&self, cost: f64, weight: f64) -> bool {
        cost > self.cost || (cost == self.cost && weight < self.weight)
    }
}

impl PackSolver for BruteForceSolver {
    fn solve(&self, task: &Task) -> Result<Package> {
        let items = task.items();
        if items.len() > MAX_ITEMS {
            return Err(PackerError::TooManyItems {
                max: MAX_ITEMS,
                given: items.len(),
            });
        }

        let last = ((1u32 << items.len()) - 1) as Mask;
        let mut best = Best::empty();

        for mask in 1..=last {
            let (weight, cost) = subset_totals(items, mask);
            if weight <= task.capacity() && best.is_improved_by(cost, weight) {
                trace!(mask, cost, weight, "Improved best subset");
                best = Best { mask, cost, weight };
            }
        }

        let package = package_from_mask(items, best.mask);
        debug!(
            event = "task_solved",
            item_count = items.len(),
            subsets = last,
            packed = package.len(),
            cost = package.total_cost(),
        );
        Ok(package)
    }

    fn solver_name(&self) -> &'static str {
        "BruteForce"
    }
}

fn is_packed(mask: Mask, position: usize) -> bool {
    mask & (1 << position) != 0
}

// Returns (weight, cost) of the subset encoded by `mask`.
fn subset_totals(items: &[Item], mask: Mask) -> (f64, f64) {
    items
        .iter()
        .enumerate()
        .filter(|(position, _)| is_packed(mask, *position))
        .fold((0.0, 0.0), |(weight, cost), (_, item)| {
            (weight + item.weight(), cost + item.cost())
        })
}

fn package_from_mask(items: &[Item], mask: Mask) -> Package {
    let packed = items
        .iter()
        .enumerate()
        .filter(|(position, _)| is_packed(mask, *position))
        .map(|(_, item)| *item)
        .collect();
    Package::new(packed)
}
