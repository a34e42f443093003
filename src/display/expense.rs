//! Expense display formatting
//!
//! Tables, detail views and one-line confirmations for expenses.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{Category, Expense};

/// Fallback when a configured date format is not a valid strftime string
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// How amounts and dates are rendered
#[derive(Debug, Clone, Copy)]
pub struct DisplayStyle<'a> {
    pub currency: &'a str,
    pub date_format: &'a str,
}

impl Default for DisplayStyle<'_> {
    fn default() -> Self {
        Self {
            currency: "$",
            date_format: FALLBACK_DATE_FORMAT,
        }
    }
}

impl DisplayStyle<'_> {
    pub fn date(&self, date: NaiveDate) -> String {
        format_date(date, self.date_format)
    }
}

/// Format a date, falling back to ISO format for an invalid pattern
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid { pattern } else { FALLBACK_DATE_FORMAT };
    date.format(pattern).to_string()
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[&Expense], style: DisplayStyle<'_>) -> String {
    let rows = expenses.iter().map(|e| ExpenseRow {
        description: e.description.clone(),
        category: e.category.to_string(),
        date: style.date(e.date),
        amount: e.amount.format_with_symbol(style.currency),
        id: e.id.to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right());
    format!("{}\n", table)
}

/// Format the expense list, with a hint when nothing matches
pub fn format_expense_list(
    expenses: &[&Expense],
    filter_active: bool,
    style: DisplayStyle<'_>,
) -> String {
    if expenses.is_empty() {
        let hint = if filter_active {
            "Try changing your search or filter criteria"
        } else {
            "Add your first expense to get started"
        };
        return format!("No expenses found.\n{}\n", hint);
    }

    let mut output = format_expense_table(expenses, style);
    let noun = if expenses.len() == 1 { "expense" } else { "expenses" };
    output.push_str(&format!("{} {}\n", expenses.len(), noun));
    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, style: DisplayStyle<'_>) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(style.currency)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Date:        {}\n", style.date(expense.date)));

    output
}

/// Confirmation shown after an expense is recorded
pub fn format_added_message(expense: &Expense, currency: &str) -> String {
    format!(
        "Expense added: {} for {} (id {})",
        expense.amount.format_with_symbol(currency),
        expense.description,
        expense.id
    )
}

/// Every category, marking the ones that currently have expenses
pub fn format_category_choices(in_use: &[Category]) -> String {
    let mut output = String::new();
    for category in Category::ALL {
        let marker = if in_use.contains(&category) { "*" } else { " " };
        output.push_str(&format!("{} {}\n", marker, category));
    }
    output.push_str("(* = has expenses)\n");
    output
}
