//! Solvers turning one task into one package.

mod brute_force;


use std::fmt::Debug;

use packer_core::{Package, Result, Task};

pub use brute_force::{BruteForceSolver, MAX_ITEMS};

/// Solves a single packing task.
///
/// Implementations must be pure with respect to the task: the batch runner
/// calls `solve` for unrelated tasks from several worker threads at once.
pub trait PackSolver: Send + Sync + Debug {
    /// Returns the best package for the task.
    ///
    /// # Errors
    ///
    /// Returns an error when the task cannot be solved by this solver, for
    /// example when it holds more items than the solver supports.
    fn solve(&self, task: &Task) -> Result<Package>;

    /// Returns the name of this solver type.
    fn solver_name(&self) -> &'static str;
}

/// Solves one task with the exhaustive solver.
pub fn solve_task(task: &Task) -> Result<Package> {
    BruteForceSolver.solve(task)
}
