//! Domain values for packing problems
//!
//! - `Item`: a candidate with an index, a weight and a cost
//! - `Task`: a capacity plus the ordered items to choose from
//! - `Package`: the subset of a task's items chosen by a solver
//!
//! All three are immutable once built and safe to share across threads.

mod item;
mod package;
mod task;

#[cfg(test)]
mod tests;

pub use item::Item;
pub use package::Package;
pub use task::Task;
