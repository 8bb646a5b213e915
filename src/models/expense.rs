//! Expense model
//!
//! A single recorded spending transaction.

use chrono::{Datelike, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// ISO-8601 layout used for display and export of timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// Local time the expense was created or last updated
    pub timestamp: NaiveDateTime,

    /// Optional category label used by summaries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    pub fn new(id: ExpenseId, description: impl Into<String>, amount: Money) -> Self {
        Self::with_timestamp(id, description, amount, now())
    }

    /// Create an expense with an explicit timestamp
    pub fn with_timestamp(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            timestamp,
            category: None,
        }
    }

    /// Builder-style category assignment
    pub fn categorized(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Replace description and amount and refresh the timestamp
    pub fn revise(&mut self, description: impl Into<String>, amount: Money) {
        self.description = description.into();
        self.amount = amount;
        // Never move backwards, even if the clock was adjusted since creation
        self.timestamp = now().max(self.timestamp);
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Timestamp rendered as ISO-8601
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Case-insensitive category match
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(ExpenseId::new(1), "coffee", Money::from_units(3));
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.amount.cents(), 300);
        assert!(expense.category.is_none());
    }

    #[test]
    fn test_serialization_shape() {
        let expense = Expense::with_timestamp(
            ExpenseId::new(2),
            "rent",
            Money::from_units(90),
            at(2024, 3, 1),
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["description"], "rent");
        assert_eq!(json["amount"], 90.0);
        assert_eq!(json["timestamp"], "2024-03-01T09:30:00");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_reads_python_style_timestamp() {
        let json = r#"{"id": 1, "description": "tea", "amount": 2.5,
                       "timestamp": "2023-11-05T14:02:33.512345"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.year(), 2023);
        assert_eq!(expense.month(), 11);
        assert_eq!(expense.amount.cents(), 250);
    }

    #[test]
    fn test_revise_refreshes_timestamp() {
        let mut expense = Expense::with_timestamp(
            ExpenseId::new(1),
            "old",
            Money::from_units(1),
            at(2020, 1, 1),
        );
        expense.revise("new", Money::from_units(2));
        assert_eq!(expense.description, "new");
        assert_eq!(expense.amount.cents(), 200);
        assert!(expense.timestamp > at(2020, 1, 1));
    }

    #[test]
    fn test_in_category() {
        let expense = Expense::new(ExpenseId::new(1), "bus", Money::from_units(2))
            .categorized(Some("Transport".into()));
        assert!(expense.in_category("transport"));
        assert!(!expense.in_category("food"));
        assert!(expense.timestamp_iso().starts_with(&expense.year().to_string()));
    }
}
