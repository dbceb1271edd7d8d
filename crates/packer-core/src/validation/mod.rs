//! Business validation applied to tasks before they are solved.
//!
//! A [`RuleSet`] holds a list of [`ValidationRule`]s and passes a task only
//! if every rule passes. Item rules are checked against each item of the
//! task in input order.
//!
//! # Example
//!
//! ```
//! use packer_core::{Item, RuleSet, Task, ValidationRule};
//!
//! let rules = RuleSet::new(vec![ValidationRule::MaxCapacity(50.0)]);
//!
//! assert!(rules.validate(&Task::new(50.0, vec![Item::new(1, 10.0, 5.0)])).is_ok());
//! assert!(rules.validate(&Task::new(60.0, Vec::new())).is_err());
//! ```

mod rule;


pub use rule::{
    ValidationRule, DEFAULT_MAX_CAPACITY, DEFAULT_MAX_ITEM_COST, DEFAULT_MAX_ITEM_COUNT,
    DEFAULT_MAX_ITEM_WEIGHT,
};

use crate::domain::Task;
use crate::error::Result;

/// All-must-pass combination of validation rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<ValidationRule>,
}

impl RuleSet {
    /// Creates a rule set from the given rules, checked in order.
    pub fn new(rules: Vec<ValidationRule>) -> Self {
        Self { rules }
    }

    /// Creates a rule set that accepts every task.
    pub fn permissive() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds the standard four rules from explicit limits.
    pub fn with_limits(
        max_capacity: f64,
        max_item_count: usize,
        max_item_weight: f64,
        max_item_cost: f64,
    ) -> Self {
        Self::new(vec![
            ValidationRule::MaxCapacity(max_capacity),
            ValidationRule::MaxItemCount(max_item_count),
            ValidationRule::MaxItemCost(max_item_cost),
            ValidationRule::MaxItemWeight(max_item_weight),
        ])
    }

    /// Adds a rule, checked after the existing ones.
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Checks one task against every rule, failing on the first violation.
    ///
    /// Task-level rules run first; item rules then run item by item, so the
    /// first offending item in input order is the one reported.
    pub fn validate(&self, task: &Task) -> Result<()> {
        for rule in self.rules.iter().filter(|r| !r.is_item_rule()) {
            rule.check(task)?;
        }
        for item in task.items() {
            for rule in self.rules.iter().filter(|r| r.is_item_rule()) {
                rule.check_item(item)?;
            }
        }
        Ok(())
    }

    /// Checks every task, failing on the first violation in input order.
    pub fn validate_all(&self, tasks: &[Task]) -> Result<()> {
        tasks.iter().try_for_each(|task| self.validate(task))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_limits(
            DEFAULT_MAX_CAPACITY,
            DEFAULT_MAX_ITEM_COUNT,
            DEFAULT_MAX_ITEM_WEIGHT,
            DEFAULT_MAX_ITEM_COST,
        )
    }
}
