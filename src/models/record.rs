//! Persisted record union
//!
//! The data file is a single JSON array mixing expenses and budget entries.
//! In memory every element is an explicit [`Record`] variant; on disk the
//! variants keep their bare object shape, so the variant is decided by which
//! keys are present when the file is parsed.

use serde::{Deserialize, Serialize};

use super::budget::BudgetEntry;
use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;

/// One element of the persisted collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Budget(BudgetEntry),
    Expense(Expense),
}

impl Record {
    pub fn as_expense(&self) -> Option<&Expense> {
        match self {
            Record::Expense(expense) => Some(expense),
            Record::Budget(_) => None,
        }
    }

    pub fn as_budget(&self) -> Option<&BudgetEntry> {
        match self {
            Record::Budget(entry) => Some(entry),
            Record::Expense(_) => None,
        }
    }
}

impl From<Expense> for Record {
    fn from(expense: Expense) -> Self {
        Record::Expense(expense)
    }
}

impl From<BudgetEntry> for Record {
    fn from(entry: BudgetEntry) -> Self {
        Record::Budget(entry)
    }
}

/// Iterate the expenses of a collection in insertion order
pub fn expenses(records: &[Record]) -> impl Iterator<Item = &Expense> {
    records.iter().filter_map(Record::as_expense)
}

/// The authoritative budget: the first budget entry in insertion order
pub fn first_budget(records: &[Record]) -> Option<Money> {
    records
        .iter()
        .find_map(Record::as_budget)
        .map(|entry| entry.budget)
}

/// Sum of all expense amounts
pub fn expense_total(records: &[Record]) -> Money {
    expenses(records).map(|e| e.amount).sum()
}

/// Position of the first expense with the given id
pub fn position_of(records: &[Record], id: ExpenseId) -> Option<usize> {
    records
        .iter()
        .position(|r| r.as_expense().is_some_and(|e| e.id == id))
}

/// Id for the next expense added to the collection
///
/// Matches the record count + 1 sequence while nothing has been deleted, and
/// stays above every surviving id once something has.
pub fn next_expense_id(records: &[Record]) -> ExpenseId {
    let count = records.len() as u64;
    let highest = expenses(records).map(|e| e.id.value()).max().unwrap_or(0);
    ExpenseId::new(count.max(highest)).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: u64, amount: i64) -> Record {
        Expense::new(ExpenseId::new(id), format!("item {}", id), Money::from_units(amount)).into()
    }

    fn budget(amount: i64) -> Record {
        BudgetEntry::new(Money::from_units(amount)).into()
    }

    #[test]
    fn test_parses_mixed_collection() {
        let json = r#"[
            {"budget": 100.0},
            {"id": 2, "description": "coffee", "amount": 30.0, "timestamp": "2024-01-02T08:00:00"}
        ]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        assert!(matches!(records[0], Record::Budget(_)));
        assert!(matches!(records[1], Record::Expense(_)));
    }

    #[test]
    fn test_rejects_unrecognised_shape() {
        let parsed: Result<Vec<Record>, _> = serde_json::from_str(r#"[{"foo": 1}]"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_round_trip_keeps_untagged_shape() {
        let records = vec![budget(50), expense(2, 10)];
        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(json[0], serde_json::json!({"budget": 50.0}));
        assert!(json[1].get("description").is_some());
    }

    #[test]
    fn test_first_budget_wins() {
        let records = vec![expense(1, 5), budget(100), budget(500)];
        assert_eq!(first_budget(&records), Some(Money::from_units(100)));
        assert_eq!(first_budget(&[expense(1, 5)]), None);
    }

    #[test]
    fn test_expense_total_ignores_budgets() {
        let records = vec![budget(100), expense(2, 30), expense(3, 90)];
        assert_eq!(expense_total(&records), Money::from_units(120));
    }

    #[test]
    fn test_next_id_counts_budget_entries() {
        assert_eq!(next_expense_id(&[]), ExpenseId::new(1));
        let records = vec![budget(100), expense(2, 30)];
        assert_eq!(next_expense_id(&records), ExpenseId::new(3));
    }

    #[test]
    fn test_next_id_after_delete_does_not_collide() {
        // 1, 2, 3 added, then 1 deleted: count is 2 but 3 is still in use
        let records = vec![expense(2, 1), expense(3, 1)];
        assert_eq!(next_expense_id(&records), ExpenseId::new(4));
    }

    #[test]
    fn test_position_of() {
        let records = vec![budget(1), expense(2, 1), expense(3, 1)];
        assert_eq!(position_of(&records, ExpenseId::new(3)), Some(2));
        assert_eq!(position_of(&records, ExpenseId::new(9)), None);
    }
}
