//! Display formatting for terminal output
//!
//! Report structs format themselves; this module covers expense listings.

pub mod expense;

pub use expense::{
    format_added_message, format_category_choices, format_date, format_expense_details,
    format_expense_list, format_expense_table, DisplayStyle,
};
