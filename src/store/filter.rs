//! Search and category filtering for the expense list

use crate::models::{Category, CategoryFilter, Expense};

/// Options for filtering expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of the description; empty matches all
    pub search: String,
    /// Category restriction
    pub category: CategoryFilter,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by description substring
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Only the given category
    pub fn only(self, category: Category) -> Self {
        self.category(CategoryFilter::Only(category))
    }

    /// Whether the filter restricts anything at all
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_all()
    }

    /// Returns a predicate over expenses; lowercases the search term once
    pub(crate) fn matcher(&self) -> impl Fn(&Expense) -> bool + '_ {
        let needle = self.search.to_lowercase();
        move |expense: &Expense| {
            self.category.matches(expense.category) && expense.description_contains(&needle)
        }
    }
}
