//! Summary service
//!
//! Totals expense amounts over a period and optional category. Budget entries
//! never contribute.

use std::fmt;

use crate::error::TrackerResult;
use crate::models::record::expenses;
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Filters accepted by `summary`
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    pub all: bool,
    pub year: Option<i32>,
    /// Only meaningful together with `year`
    pub month: Option<u32>,
    pub category: Option<String>,
}

impl SummaryFilter {
    /// Resolve the period to aggregate over: `all` beats `year`, and `month`
    /// narrows `year`. A category on its own summarizes everything in it.
    pub fn scope(&self) -> Option<SummaryScope> {
        if self.all {
            return Some(SummaryScope::All);
        }
        match (self.year, self.month) {
            (Some(year), Some(month)) => Some(SummaryScope::Month { year, month }),
            (Some(year), None) => Some(SummaryScope::Year(year)),
            (None, _) if self.category.is_some() => Some(SummaryScope::All),
            (None, _) => None,
        }
    }
}

/// Period a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryScope {
    All,
    Year(i32),
    Month { year: i32, month: u32 },
}

impl SummaryScope {
    fn contains(&self, expense: &Expense) -> bool {
        match *self {
            SummaryScope::All => true,
            SummaryScope::Year(year) => expense.year() == year,
            SummaryScope::Month { year, month } => {
                expense.year() == year && expense.month() == month
            }
        }
    }
}

impl fmt::Display for SummaryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryScope::All => write!(f, "all time"),
            SummaryScope::Year(year) => write!(f, "{}", year),
            SummaryScope::Month { year, month } => write!(f, "{}/{}", month, year),
        }
    }
}

/// An aggregate total over a filtered subset of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scope: SummaryScope,
    pub category: Option<String>,
    pub total: Money,
    /// Number of expenses that contributed
    pub count: usize,
}

/// Service for expense summaries
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Total the expenses matching `filter`, or `None` when it selects no period
    pub fn summarize(&self, filter: &SummaryFilter) -> TrackerResult<Option<Summary>> {
        let Some(scope) = filter.scope() else {
            return Ok(None);
        };

        let records = self.storage.load()?;
        let matching: Vec<&Expense> = expenses(&records)
            .filter(|e| scope.contains(e))
            .filter(|e| filter.category.as_deref().map_or(true, |c| e.in_category(c)))
            .collect();

        let summary = Summary {
            scope,
            category: filter.category.clone(),
            total: matching.iter().map(|e| e.amount).sum(),
            count: matching.len(),
        };
        tracing::debug!(?summary, "computed summary");

        Ok(Some(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetEntry, ExpenseId, Record};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn expense(id: u64, y: i32, m: u32, units: i64, category: Option<&str>) -> Record {
        let at = NaiveDate::from_ymd_opt(y, m, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Expense::with_timestamp(ExpenseId::new(id), format!("e{}", id), Money::from_units(units), at)
            .categorized(category.map(String::from))
            .into()
    }

    fn storage() -> Storage {
        Storage::new(MemoryStore::with_records(vec![
            BudgetEntry::new(Money::from_units(1000)).into(),
            expense(2, 2023, 12, 10, Some("food")),
            expense(3, 2024, 1, 20, Some("Food")),
            expense(4, 2024, 3, 40, None),
        ]))
    }

    fn summarize(filter: SummaryFilter) -> Option<Summary> {
        let storage = storage();
        SummaryService::new(&storage).summarize(&filter).unwrap()
    }

    #[test]
    fn test_all() {
        let summary = summarize(SummaryFilter {
            all: true,
            year: Some(1999),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(summary.scope, SummaryScope::All);
        assert_eq!(summary.total, Money::from_units(70));
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_year() {
        let summary = summarize(SummaryFilter {
            year: Some(2024),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(summary.total, Money::from_units(60));
    }

    #[test]
    fn test_month_narrows_year() {
        let summary = summarize(SummaryFilter {
            year: Some(2024),
            month: Some(3),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(summary.scope, SummaryScope::Month { year: 2024, month: 3 });
        assert_eq!(summary.total, Money::from_units(40));
        assert_eq!(summary.scope.to_string(), "3/2024");
    }

    #[test]
    fn test_category_filter() {
        let summary = summarize(SummaryFilter {
            category: Some("FOOD".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(summary.scope, SummaryScope::All);
        assert_eq!(summary.total, Money::from_units(30));

        let in_year = summarize(SummaryFilter {
            year: Some(2024),
            category: Some("food".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(in_year.total, Money::from_units(20));
    }

    #[test]
    fn test_no_selector() {
        assert!(summarize(SummaryFilter::default()).is_none());
        // month alone does not pick a period
        assert!(summarize(SummaryFilter {
            month: Some(3),
            ..Default::default()
        })
        .is_none());
    }

    #[test]
    fn test_year_with_no_matches_is_zero() {
        let summary = summarize(SummaryFilter {
            year: Some(2030),
            ..Default::default()
        })
        .unwrap();
        assert!(summary.total.is_zero());
        assert_eq!(summary.count, 0);
    }
}
