//! In-memory expense store
//!
//! `ExpenseStore` owns the session's expenses. Records are only added through
//! [`ExpenseStore::add`] and only removed through [`ExpenseStore::remove`];
//! storage order is always insertion order.

mod analytics;
pub mod filter;
pub mod seed;

use std::collections::HashSet;

use crate::models::{Category, Expense, ExpenseId, NewExpense};

pub use analytics::{CategoryTotal, CategoryTotals, TrendPoint, DEFAULT_TREND_WINDOW};
pub use filter::ExpenseFilter;

/// Owner of the session's expense records
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    /// Every id this store has ever held, so removed ids are never handed out again
    issued: HashSet<ExpenseId>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the five sample expenses
    pub fn with_sample_data() -> Self {
        Self::from_expenses(seed::sample_expenses())
    }

    /// Create a store from existing records, keeping their order
    ///
    /// A record whose id is already present is dropped.
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let mut store = Self::new();
        for expense in expenses {
            if !store.issued.insert(expense.id.clone()) {
                tracing::warn!(id = %expense.id, "skipping expense with duplicate id");
                continue;
            }
            store.expenses.push(expense);
        }
        store
    }

    /// Add a validated expense and return the stored record
    pub fn add(&mut self, new: NewExpense) -> Expense {
        let id = self.fresh_id();
        let expense = Expense::from_new(id, new);

        tracing::debug!(
            id = %expense.id,
            amount = %expense.amount,
            category = %expense.category,
            "added expense"
        );

        self.expenses.push(expense.clone());
        expense
    }

    /// Remove the expense with the given id
    ///
    /// Returns the removed record, or `None` when no record matched.
    pub fn remove(&mut self, id: &ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| &e.id == id)?;
        let removed = self.expenses.remove(index);
        tracing::debug!(id = %removed.id, "removed expense");
        Some(removed)
    }

    /// Expenses matching the filter, in storage order
    pub fn filter(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        let matches = filter.matcher();
        self.expenses.iter().filter(|&e| matches(e)).collect()
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ExpenseId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Distinct categories present, in the order they first appear
    pub fn categories_in_use(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for expense in &self.expenses {
            if !seen.contains(&expense.category) {
                seen.push(expense.category);
            }
        }
        seen
    }

    fn fresh_id(&mut self) -> ExpenseId {
        loop {
            let candidate = ExpenseId::generate();
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
