//! Configuration system for Packer.
//!
//! Load the worker pool size and the validation limits from TOML or YAML
//! files without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use packer_config::PackerConfig;
//!
//! let config = PackerConfig::from_toml_str(r#"
//!     thread_count = 8
//!
//!     [limits]
//!     max_capacity = 250.0
//!     max_item_count = 12
//! "#).unwrap();
//!
//! assert_eq!(config.thread_count, 8);
//! assert_eq!(config.limits.max_capacity, 250.0);
//! assert_eq!(config.limits.max_item_weight, 100.0);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use packer_config::PackerConfig;
//!
//! let config = PackerConfig::load("packer.toml").unwrap_or_default();
//! assert_eq!(config.thread_count, 4);
//! ```

use std::path::Path;

use packer_core::validation::{
    DEFAULT_MAX_CAPACITY, DEFAULT_MAX_ITEM_COST, DEFAULT_MAX_ITEM_COUNT, DEFAULT_MAX_ITEM_WEIGHT,
};
use packer_core::RuleSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Default number of workers solving a batch.
pub const DEFAULT_THREAD_COUNT: usize = 4;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main packer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PackerConfig {
    /// Number of workers solving tasks of one batch in parallel.
    #[serde(default = "default_thread_count")]
    pub thread_count: usize,

    /// Limits enforced before any task is solved.
    #[serde(default)]
    pub limits: LimitsConfig,
}

fn default_thread_count() -> usize {
    DEFAULT_THREAD_COUNT
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            thread_count: DEFAULT_THREAD_COUNT,
            limits: LimitsConfig::default(),
        }
    }
}

impl PackerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// holds values rejected by [`PackerConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the worker count.
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Replaces the validation limits.
    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Rejects a zero worker count and negative or NaN limits.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_count == 0 {
            return Err(ConfigError::Invalid(
                "thread_count must be at least 1".to_string(),
            ));
        }
        self.limits.validate()
    }

    /// Builds the validation rules described by the configured limits.
    pub fn rule_set(&self) -> RuleSet {
        self.limits.rule_set()
    }
}

/// Inclusive business limits checked before solving.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LimitsConfig {
    /// Maximum task capacity.
    pub max_capacity: f64,

    /// Maximum number of items in one task.
    pub max_item_count: usize,

    /// Maximum weight of a single item.
    pub max_item_weight: f64,

    /// Maximum cost of a single item.
    pub max_item_cost: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            max_item_count: DEFAULT_MAX_ITEM_COUNT,
            max_item_weight: DEFAULT_MAX_ITEM_WEIGHT,
            max_item_cost: DEFAULT_MAX_ITEM_COST,
        }
    }
}

impl LimitsConfig {
    /// Builds the validation rules for these limits.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::with_limits(
            self.max_capacity,
            self.max_item_count,
            self.max_item_weight,
            self.max_item_cost,
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("max_capacity", self.max_capacity),
            ("max_item_weight", self.max_item_weight),
            ("max_item_cost", self.max_item_cost),
        ];
        for (name, value) in limits {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a non-negative number, given: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
