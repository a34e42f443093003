//! Recent Spending Trend

use serde::Serialize;

use crate::store::{ExpenseStore, TrendPoint};

/// Daily spending over the most recent expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingTrend {
    /// How many of the latest expenses were considered
    pub window: usize,
    /// Oldest first
    pub points: Vec<TrendPoint>,
}

impl SpendingTrend {
    pub fn generate(store: &ExpenseStore, window: usize) -> Self {
        Self {
            window,
            points: store.recent_trend(window),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Format the trend for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "No data available\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "Recent Spending Trend (last {} expenses)\n",
            self.window
        ));
        output.push_str(&"=".repeat(40));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<10} {:>14}\n",
                point.label,
                point.amount.format_with_symbol(currency)
            ));
        }

        output
    }
}
