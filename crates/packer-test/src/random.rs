//! Seeded random tasks and an independent reference search.
//!
//! Costs are whole numbers so cost sums are exact and optimal costs can be
//! compared with `==`. Weights carry two decimals like real input.

use packer_core::{Item, Task};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates a seeded generator for reproducible fixtures.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Builds a task with `item_count` items, weights and costs in `0..=100`.
pub fn random_task(rng: &mut impl Rng, item_count: usize) -> Task {
    let capacity = rng.random_range(0..=100) as f64;
    let items = (0..item_count)
        .map(|i| {
            let weight = (rng.random_range(0.0..100.0_f64) * 100.0).round() / 100.0;
            let cost = rng.random_range(0..=100) as f64;
            Item::new(i as u32 + 1, weight, cost)
        })
        .collect();
    Task::new(capacity, items)
}

/// Returns `(cost, weight)` of the best subset with total weight at most
/// the capacity, preferring lighter subsets among equal costs.
///
/// Explores include/exclude decisions recursively, independent of any
/// mask-based enumeration.
pub fn reference_optimum(task: &Task) -> (f64, f64) {
    fn explore(items: &[Item], capacity: f64, cost: f64, weight: f64, best: &mut (f64, f64)) {
        let Some((first, rest)) = items.split_first() else {
            if cost > best.0 || (cost == best.0 && weight < best.1) {
                *best = (cost, weight);
            }
            return;
        };
        explore(rest, capacity, cost, weight, best);
        let with_weight = weight + first.weight();
        if with_weight <= capacity {
            explore(rest, capacity, cost + first.cost(), with_weight, best);
        }
    }

    let mut best = (0.0, 0.0);
    explore(task.items(), task.capacity(), 0.0, 0.0, &mut best);
    best
}
