//! Error types for Packer

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Packer operations
#[derive(Debug, Error)]
pub enum PackerError {
    /// The task source could not be found
    #[error("Input file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading tasks or writing packages failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Task text does not match the expected grammar
    #[error("Incorrect input at line {line}: {message}")]
    IncorrectInput { line: usize, message: String },

    /// A task or item violates a business limit
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A task has more items than the exhaustive solver can enumerate
    #[error("Solver accepts up to {max} items per task, given: {given}")]
    TooManyItems { max: usize, given: usize },

    /// Invalid runtime configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not occur in normal operation)
    #[error("System error: {0}")]
    System(String),
}

impl PackerError {
    /// Returns true for business-limit violations.
    pub fn is_validation(&self) -> bool {
        matches!(self, PackerError::Validation(_))
    }
}

/// A business limit violated by a task or one of its items.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Max weight that a package can take is ≤ {max:?}, given: {given:?}")]
    MaxCapacity { max: f64, given: f64 },

    #[error("Task might have up to {max} things to pack from, given: {given}")]
    MaxItemCount { max: usize, given: usize },

    #[error("Max weight that a thing can have is ≤ {max:?}, given: {given:?}")]
    MaxItemWeight { index: u32, max: f64, given: f64 },

    #[error("Max cost that a thing can have is ≤ {max:?}, given: {given:?}")]
    MaxItemCost { index: u32, max: f64, given: f64 },
}

/// Result type alias for Packer operations
pub type Result<T> = std::result::Result<T, PackerError>;
