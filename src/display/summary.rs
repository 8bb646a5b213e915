//! Summary display formatting

use crate::services::{Summary, SummaryScope};

use super::expense::NO_EXPENSES;

/// Format the one-line summary, or the no-match message when no period was selected
pub fn format_summary(summary: Option<&Summary>, currency_symbol: &str) -> String {
    let Some(summary) = summary else {
        return NO_EXPENSES.to_string();
    };

    let total = summary.total.format_with_symbol(currency_symbol);
    let mut line = match summary.scope {
        SummaryScope::All => format!("The total expense is {}", total),
        scope => format!("The total expense for {} is {}", scope, total),
    };

    if let Some(category) = &summary.category {
        line.push_str(&format!(" in category '{}'", category));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn summary(scope: SummaryScope, category: Option<&str>) -> Summary {
        Summary {
            scope,
            category: category.map(String::from),
            total: Money::from_cents(12_050),
            count: 3,
        }
    }

    #[test]
    fn test_all_time() {
        let s = summary(SummaryScope::All, None);
        assert_eq!(format_summary(Some(&s), "$"), "The total expense is $120.50");
    }

    #[test]
    fn test_year_and_month() {
        let year = summary(SummaryScope::Year(2024), None);
        assert_eq!(
            format_summary(Some(&year), "$"),
            "The total expense for 2024 is $120.50"
        );

        let month = summary(SummaryScope::Month { year: 2024, month: 7 }, None);
        assert_eq!(
            format_summary(Some(&month), "£"),
            "The total expense for 7/2024 is £120.50"
        );
    }

    #[test]
    fn test_category_suffix() {
        let s = summary(SummaryScope::Year(2023), Some("travel"));
        assert_eq!(
            format_summary(Some(&s), "$"),
            "The total expense for 2023 is $120.50 in category 'travel'"
        );
    }

    #[test]
    fn test_nothing_selected() {
        assert_eq!(format_summary(None, "$"), "No expenses found");
    }
}
