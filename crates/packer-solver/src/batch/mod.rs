//! Concurrent solving of a batch of unrelated tasks.
//!
//! Each call to [`BatchRunner::run`] builds its own worker pool, solves every
//! task on it and drops it before returning. Packages come back in input
//! order no matter which worker finishes first.
//!
//! # Example
//!
//! ```
//! use packer_core::{Item, Task};
//! use packer_solver::BatchRunner;
//!
//! let tasks = vec![
//!     Task::new(81.0, vec![Item::new(1, 53.38, 45.0), Item::new(2, 88.62, 98.0)]),
//!     Task::new(8.0, vec![Item::new(1, 15.3, 34.0)]),
//! ];
//!
//! let packages = BatchRunner::brute_force().with_thread_count(2).run(&tasks).unwrap();
//! assert_eq!(packages[0].indices(), vec![1]);
//! assert!(packages[1].is_empty());
//! ```


use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use packer_config::PackerConfig;
use packer_core::{Package, PackerError, Result, Task};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{info, warn};

use crate::solver::{BruteForceSolver, PackSolver};

pub use packer_config::DEFAULT_THREAD_COUNT;

/// Solves batches of tasks on a fixed-size worker pool.
#[derive(Debug, Clone)]
pub struct BatchRunner<S: PackSolver = BruteForceSolver> {
    solver: S,
    thread_count: usize,
}

impl BatchRunner<BruteForceSolver> {
    /// Creates a runner using the exhaustive solver.
    pub fn brute_force() -> Self {
        Self::new(BruteForceSolver)
    }
}

impl Default for BatchRunner<BruteForceSolver> {
    fn default() -> Self {
        Self::brute_force()
    }
}

impl<S: PackSolver> BatchRunner<S> {
    /// Creates a runner with [`DEFAULT_THREAD_COUNT`] workers.
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            thread_count: DEFAULT_THREAD_COUNT,
        }
    }

    /// Creates a runner with the worker count of the given configuration.
    pub fn from_config(solver: S, config: &PackerConfig) -> Self {
        Self::new(solver).with_thread_count(config.thread_count)
    }

    /// Sets the number of workers per batch.
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    pub fn thread_count(&self) -> usize {
        self.thread_count
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Solves every task and returns packages aligned with `tasks`.
    ///
    /// Blocks until all tasks are solved. Either every package is returned
    /// or a single error: the failure of the lowest-index failing task.
    /// A panicking solve is reported as [`PackerError::System`].
    ///
    /// # Errors
    ///
    /// Returns [`PackerError::Config`] for a zero worker count and
    /// [`PackerError::System`] if the pool cannot be built; in both cases
    /// nothing is solved.
    pub fn run(&self, tasks: &[Task]) -> Result<Vec<Package>> {
        if self.thread_count == 0 {
            return Err(PackerError::Config(
                "batch runner needs at least one worker".to_string(),
            ));
        }
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        info!(
            event = "batch_start",
            task_count = tasks.len(),
            thread_count = self.thread_count,
            solver = self.solver.solver_name(),
        );

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.thread_count)
            .thread_name(|i| format!("packer-worker-{}", i))
            .build()
            .map_err(|e| PackerError::System(format!("failed to build worker pool: {}", e)))?;

        let outcomes: Vec<Result<Package>> =
            pool.install(|| tasks.par_iter().map(|task| self.solve_guarded(task)).collect());
        drop(pool);

        let packages = collect_in_order(outcomes)?;

        info!(
            event = "batch_end",
            task_count = packages.len(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(packages)
    }

    fn solve_guarded(&self, task: &Task) -> Result<Package> {
        panic::catch_unwind(AssertUnwindSafe(|| self.solver.solve(task)))
            .unwrap_or_else(|payload| Err(PackerError::System(panic_message(payload))))
    }
}

fn collect_in_order(outcomes: Vec<Result<Package>>) -> Result<Vec<Package>> {
    let mut packages = Vec::with_capacity(outcomes.len());
    for (task_index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(package) => packages.push(package),
            Err(err) => {
                warn!(event = "task_failed", task_index, error = %err);
                return Err(err);
            }
        }
    }
    Ok(packages)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("solver panicked: {}", detail)
}
