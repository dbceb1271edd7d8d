//! Shared test fixtures for Packer crates.
//!
//! This crate provides data and pure functions for testing.
//!
//! - [`sample`] - The reference input file, its tasks and its expected output
//! - [`random`] - Seeded random tasks and an independent reference search
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! packer-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use packer_test::sample::{sample_tasks, SAMPLE_OUTPUT};
//! use packer_test::random::{random_task, reference_optimum};
//! ```

pub mod random;
pub mod sample;

pub use random::{random_task, reference_optimum};
pub use sample::{item, sample_tasks, SAMPLE_INPUT, SAMPLE_OUTPUT};
