//! Spending Summary
//!
//! Headline figures for the whole session: total, count, average and the
//! extremes.

use serde::Serialize;

use crate::models::{Category, Money};
use crate::store::ExpenseStore;

/// Placeholder shown for figures that do not exist yet
pub const NOT_AVAILABLE: &str = "N/A";

/// Headline spending figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    /// Total spent across all expenses
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Mean expense; `None` when there are no expenses
    pub average: Option<f64>,
    /// Largest single expense
    pub highest: Money,
    /// Smallest single expense
    pub lowest: Money,
    /// Category with the most expenses
    pub most_common_category: Option<Category>,
}

impl SpendingSummary {
    /// Generate a summary from the store's current contents
    pub fn generate(store: &ExpenseStore) -> Self {
        Self {
            total: store.total_spent(),
            count: store.len(),
            average: store.average_expense(),
            highest: store.max_expense(),
            lowest: store.min_expense(),
            most_common_category: store.most_common_category(),
        }
    }

    /// Average rounded to cents, or "N/A"
    pub fn average_display(&self, currency: &str) -> String {
        match self.average {
            Some(average) => format!("{}{:.2}", currency, average),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn most_common_display(&self) -> String {
        self.most_common_category
            .map(|c| c.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<24}{:>16}\n",
            "Total Spent:",
            self.total.format_with_symbol(currency)
        ));
        output.push_str(&format!("{:<24}{:>16}\n", "Number of Expenses:", self.count));
        output.push_str(&format!(
            "{:<24}{:>16}\n",
            "Average Expense:",
            self.average_display(currency)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<24}{:>16}\n",
            "Highest Expense:",
            self.highest.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<24}{:>16}\n",
            "Lowest Expense:",
            self.lowest.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<24}{:>16}\n",
            "Most Common Category:",
            self.most_common_display()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_summary() {
        let summary = SpendingSummary::generate(&ExpenseStore::with_sample_data());
        assert_eq!(summary.total, Money::from_cents(34349));
        assert_eq!(summary.count, 5);
        assert_eq!(summary.highest, Money::from_cents(12050));
        assert_eq!(summary.lowest, Money::from_cents(3200));
        assert_eq!(summary.most_common_category, Some(Category::Utilities));
        assert_eq!(summary.average_display("$"), "$68.70");
    }

    #[test]
    fn test_empty_summary_uses_placeholders() {
        let summary = SpendingSummary::generate(&ExpenseStore::new());
        assert_eq!(summary.average_display("$"), NOT_AVAILABLE);
        assert_eq!(summary.most_common_display(), NOT_AVAILABLE);

        let output = summary.format_terminal("$");
        assert!(output.contains("$0.00"));
        assert!(output.contains("N/A"));
    }

    #[test]
    fn test_format_terminal() {
        let output = SpendingSummary::generate(&ExpenseStore::with_sample_data())
            .format_terminal("$");
        assert!(output.contains("Total Spent:"));
        assert!(output.contains("$343.49"));
        assert!(output.contains("$120.50"));
        assert!(output.contains("Utilities"));
    }
}
