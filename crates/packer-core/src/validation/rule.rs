use crate::domain::{Item, Task};
use crate::error::{Result, ValidationError};

pub const DEFAULT_MAX_CAPACITY: f64 = 100.0;
pub const DEFAULT_MAX_ITEM_COUNT: usize = 15;
pub const DEFAULT_MAX_ITEM_WEIGHT: f64 = 100.0;
pub const DEFAULT_MAX_ITEM_COST: f64 = 100.0;

/// A single business limit. Limits are inclusive: a value equal to the
/// limit passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationRule {
    /// Task capacity must not exceed the limit.
    MaxCapacity(f64),
    /// Task must not hold more items than the limit.
    MaxItemCount(usize),
    /// Every item weight must not exceed the limit.
    MaxItemWeight(f64),
    /// Every item cost must not exceed the limit.
    MaxItemCost(f64),
}

impl ValidationRule {
    /// Checks the task against this rule.
    pub fn check(&self, task: &Task) -> Result<()> {
        match *self {
            ValidationRule::MaxCapacity(max) => {
                if task.capacity() > max {
                    return Err(ValidationError::MaxCapacity {
                        max,
                        given: task.capacity(),
                    }
                    .into());
                }
            }
            ValidationRule::MaxItemCount(max) => {
                if task.item_count() > max {
                    return Err(ValidationError::MaxItemCount {
                        max,
                        given: task.item_count(),
                    }
                    .into());
                }
            }
            ValidationRule::MaxItemWeight(_) | ValidationRule::MaxItemCost(_) => {
                for item in task.items() {
                    self.check_item(item)?;
                }
            }
        }
        Ok(())
    }

    /// Returns true for rules evaluated against each item.
    pub fn is_item_rule(&self) -> bool {
        matches!(
            self,
            ValidationRule::MaxItemWeight(_) | ValidationRule::MaxItemCost(_)
        )
    }

    /// Checks a single item. Task-level rules always pass here.
    pub fn check_item(&self, item: &Item) -> Result<()> {
        match *self {
            ValidationRule::MaxItemWeight(max) if item.weight() > max => {
                Err(ValidationError::MaxItemWeight {
                    index: item.index(),
                    max,
                    given: item.weight(),
                }
                .into())
            }
            ValidationRule::MaxItemCost(max) if item.cost() > max => {
                Err(ValidationError::MaxItemCost {
                    index: item.index(),
                    max,
                    given: item.cost(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}
