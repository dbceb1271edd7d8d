//! Packer - an exact knapsack batch solver in Rust
//!
//! Reads packing tasks, validates them, solves each one exhaustively on a
//! worker pool and renders the chosen item indices.
//!
//! # Example
//!
//! ```rust
//! use packer::prelude::*;
//!
//! let output = packer::pack_reader("75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16)\n".as_bytes()).unwrap();
//! assert_eq!(output, "2,3\n");
//!
//! let task = Task::new(8.0, vec![Item::new(1, 15.3, 34.0)]);
//! let packages = Packer::new().pack(&[task]).unwrap();
//! assert!(packages[0].is_empty());
//! ```

pub use packer_config::{ConfigError, LimitsConfig, PackerConfig};
pub use packer_core::{
    Item, Package, PackerError, Result, RuleSet, Task, ValidationError, ValidationRule,
};
pub use packer_io::{format_package, render_packages, PackageWriter, TaskReader};
pub use packer_solver::{BatchRunner, BruteForceSolver, PackSolver, MAX_ITEMS};

pub mod logging;
mod packer;

pub use packer::{pack_file, pack_reader, Packer};

pub mod prelude {
    pub use super::{Item, Package, Packer, PackerError, Task};
}
