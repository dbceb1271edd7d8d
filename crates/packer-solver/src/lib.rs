//! Packer Solver Engine
//!
//! This crate provides:
//! - `PackSolver`, the seam between a batch and the algorithm solving each task
//! - `BruteForceSolver`, an exact exhaustive search over item subsets
//! - `BatchRunner`, which solves a batch of tasks on a fixed-size worker pool
//!
//! Logging levels:
//! - **INFO**: Batch start/end with task count, worker count and timing
//! - **WARN**: The task whose failure aborted a batch
//! - **DEBUG**: One event per solved task
//! - **TRACE**: Each improvement of the best subset

pub mod batch;
pub mod solver;

pub use batch::{BatchRunner, DEFAULT_THREAD_COUNT};
pub use solver::{solve_task, BruteForceSolver, PackSolver, MAX_ITEMS};
