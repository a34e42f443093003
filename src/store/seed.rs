//! Sample data a new session starts with

use chrono::NaiveDate;

use crate::models::{Category, Expense, ExpenseId, Money};

/// (id, description, cents, category, (year, month, day))
type SeedRow = (&'static str, &'static str, i64, Category, (i32, u32, u32));

const SAMPLE_EXPENSES: [SeedRow; 5] = [
    ("1", "Groceries", 8575, Category::Food, (2024, 5, 15)),
    ("2", "Electricity bill", 12050, Category::Utilities, (2024, 5, 10)),
    ("3", "Movie tickets", 3200, Category::Entertainment, (2024, 5, 18)),
    ("4", "Gas", 4525, Category::Transportation, (2024, 5, 12)),
    ("5", "Internet subscription", 5999, Category::Utilities, (2024, 5, 5)),
];

/// The five sample expenses, in insertion order
pub fn sample_expenses() -> Vec<Expense> {
    SAMPLE_EXPENSES
        .iter()
        .filter_map(|&(id, description, cents, category, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Expense {
                id: ExpenseId::from(id),
                description: description.to_string(),
                amount: Money::from_cents(cents),
                category,
                date,
            })
        })
        .collect()
}
