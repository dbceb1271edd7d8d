//! Entry points that hide the reader, validation, batch and writer wiring.

use std::io::{BufReader, Read};
use std::path::Path;

use packer_config::PackerConfig;
use packer_core::{Package, PackerError, Result, RuleSet, Task};
use packer_io::{PackageWriter, TaskReader};
use packer_solver::{BatchRunner, BruteForceSolver, PackSolver};
use tracing::{debug, warn};

/// Validates and solves batches of packing tasks.
///
/// Validation is all-or-nothing: if any task breaks a limit, no task of the
/// batch is solved.
#[derive(Debug, Clone)]
pub struct Packer<S: PackSolver = BruteForceSolver> {
    rules: RuleSet,
    runner: BatchRunner<S>,
}

impl Packer<BruteForceSolver> {
    /// Creates a packer with default limits and worker count.
    pub fn new() -> Self {
        Self::from_config(&PackerConfig::default())
    }

    /// Creates a packer with the limits and worker count of `config`.
    pub fn from_config(config: &PackerConfig) -> Self {
        Self::with_solver(BruteForceSolver, config)
    }
}

impl Default for Packer<BruteForceSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PackSolver> Packer<S> {
    /// Creates a packer solving tasks with the given solver.
    pub fn with_solver(solver: S, config: &PackerConfig) -> Self {
        Self {
            rules: config.rule_set(),
            runner: BatchRunner::from_config(solver, config),
        }
    }

    /// Replaces the validation rules.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Sets the number of workers per batch.
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.runner = self.runner.with_thread_count(thread_count);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn runner(&self) -> &BatchRunner<S> {
        &self.runner
    }

    /// Validates every task, then solves them all.
    ///
    /// Returns one package per task in input order, or the first error.
    pub fn pack(&self, tasks: &[Task]) -> Result<Vec<Package>> {
        if let Err(err) = self.rules.validate_all(tasks) {
            warn!(event = "validation_failed", error = %err);
            return Err(err);
        }
        debug!(event = "validation_passed", task_count = tasks.len());
        self.runner.run(tasks)
    }

    /// Reads tasks from `input` and returns the rendered packages.
    pub fn pack_to_string(&self, input: impl Read) -> Result<String> {
        let tasks = TaskReader::new(BufReader::new(input)).read_all()?;
        self.render(&tasks)
    }

    /// Reads tasks from the file at `path` and returns the rendered packages.
    ///
    /// # Errors
    ///
    /// Returns [`PackerError::FileNotFound`] if the file does not exist.
    pub fn pack_path(&self, path: impl AsRef<Path>) -> Result<String> {
        let tasks = TaskReader::open(path)?.read_all()?;
        self.render(&tasks)
    }

    fn render(&self, tasks: &[Task]) -> Result<String> {
        let packages = self.pack(tasks)?;
        let mut writer = PackageWriter::new(Vec::new());
        writer.write_all(&packages)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| PackerError::System(format!("rendered output is not UTF-8: {}", e)))
    }
}

/// Packs the task file at `path` with default settings.
///
/// Returns one line per task: the chosen item indices joined by `,`, or `-`
/// when nothing is packed.
pub fn pack_file(path: impl AsRef<Path>) -> Result<String> {
    Packer::new().pack_path(path)
}

/// Packs tasks read from `input` with default settings.
pub fn pack_reader(input: impl Read) -> Result<String> {
    Packer::new().pack_to_string(input)
}
