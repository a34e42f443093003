//! Category Breakdown
//!
//! Spending per category with each category's share of the total.

use serde::Serialize;
use std::io::Write;

use crate::error::TrackerResult;
use crate::models::{Category, Money};
use crate::store::ExpenseStore;

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending by category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// Categories with spending, in the order they first appear
    pub rows: Vec<CategoryShare>,
    pub total: Money,
}

impl CategoryBreakdown {
    /// Generate a breakdown from the store's current contents
    pub fn generate(store: &ExpenseStore) -> Self {
        let totals = store.category_totals();
        let total = totals.grand_total();

        let rows = totals
            .iter()
            .map(|entry| CategoryShare {
                category: entry.category,
                total: entry.total,
                count: entry.count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    (entry.total.cents() as f64 / total.cents() as f64) * 100.0
                },
            })
            .collect();

        Self { rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Categories with the most spending first
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryShare> {
        let mut rows: Vec<_> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        rows.into_iter().take(limit).collect()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "No data available\n".to_string();
        }

        let mut output = String::new();

        output.push_str("Expenses by Category\n");
        output.push_str(&"=".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(52));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>8} {:>7.0}%\n",
                row.category.name(),
                row.total.format_with_symbol(currency),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            "TOTAL",
            self.total.format_with_symbol(currency)
        ));

        output
    }

    /// Export the breakdown as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["Category", "Amount", "Count", "Percentage"])?;

        for row in &self.rows {
            out.write_record([
                row.category.name().to_string(),
                format!("{:.2}", row.total.to_f64()),
                row.count.to_string(),
                format!("{:.2}", row.percentage),
            ])?;
        }

        out.flush()?;
        Ok(())
    }
}
