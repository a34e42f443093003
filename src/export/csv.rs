//! CSV Export functionality
//!
//! Writes expense rows in a spreadsheet-friendly layout.

use std::io::Write;

use crate::error::TrackerResult;
use crate::models::Expense;

/// Export expenses to CSV, one row per expense in the given order
pub fn export_expenses_csv<'a, W, I>(expenses: I, writer: W) -> TrackerResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Expense>,
{
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["ID", "Date", "Description", "Category", "Amount"])?;

    for expense in expenses {
        out.write_record([
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.description.clone(),
            expense.category.to_string(),
            format!("{:.2}", expense.amount.to_f64()),
        ])?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ExpenseStore;

    #[test]
    fn test_export_seed() {
        let store = ExpenseStore::with_sample_data();
        let mut buffer = Vec::new();
        export_expenses_csv(store.expenses(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "ID,Date,Description,Category,Amount");
        assert_eq!(lines[1], "1,2024-05-15,Groceries,Food,85.75");
        assert_eq!(lines[3], "3,2024-05-18,Movie tickets,Entertainment,32.00");
    }

    #[test]
    fn test_export_quotes_commas() {
        let mut store = ExpenseStore::new();
        store.add(crate::models::NewExpense::new(
            "Books, pens",
            crate::models::Money::from_cents(1999),
            crate::models::Category::Education,
            chrono::NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        ));
        let mut buffer = Vec::new();
        export_expenses_csv(store.expenses(), &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\"Books, pens\",Education,19.99"));
    }
}
