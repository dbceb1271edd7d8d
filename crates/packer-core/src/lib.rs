//! Packer Core - domain types shared by every Packer crate
//!
//! This crate provides:
//! - Domain values (`Item`, `Task`, `Package`)
//! - The error taxonomy used across the workspace
//! - Validation rules applied to tasks before they reach the solver

pub mod domain;
pub mod error;
pub mod validation;

pub use domain::{Item, Package, Task};
pub use error::{PackerError, Result, ValidationError};
pub use validation::{RuleSet, ValidationRule};
