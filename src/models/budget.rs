//! Budget entry model
//!
//! A monthly budget ceiling stored in the same collection as expenses.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A recorded monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BudgetEntry {
    pub budget: Money,
}

impl BudgetEntry {
    pub fn new(budget: Money) -> Self {
        Self { budget }
    }
}
