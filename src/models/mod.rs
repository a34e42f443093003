//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain:
//! expenses, their ids, money amounts and categories.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CategoryFilter, CategoryParseError};
pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
