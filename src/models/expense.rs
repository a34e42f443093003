//! Expense model
//!
//! An `Expense` is immutable once the store has created it. `NewExpense` is
//! the already-validated input handed to the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    pub category: Category,

    /// Day of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Build a record from validated input and an id chosen by the store
    pub(crate) fn from_new(id: ExpenseId, new: NewExpense) -> Self {
        Self {
            id,
            description: new.description,
            amount: new.amount,
            category: new.category,
            date: new.date,
        }
    }

    /// Case-insensitive substring match on the description
    ///
    /// `needle_lower` must already be lowercased.
    pub(crate) fn description_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.description.to_lowercase().contains(needle_lower)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Input for creating an expense
///
/// Produced by [`crate::validation::ExpenseForm::validate`]; the store
/// trusts it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
            date,
        }
    }
}
