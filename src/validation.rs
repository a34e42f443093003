//! Expense entry validation
//!
//! Raw form input is checked here before it ever reaches the store. Every
//! field is checked, so the user sees all problems at once.

use chrono::{NaiveDate, Utc};
use std::fmt;

use crate::models::{Category, Money, NewExpense};

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_CHARS: usize = 2;

/// Date format accepted on entry
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount accepted for a single expense ($1,000,000,000.00)
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_DATE: &str = "date";

const MSG_DESCRIPTION: &str = "Description must be at least 2 characters.";
const MSG_AMOUNT: &str = "Amount must be a positive number.";
const MSG_AMOUNT_TOO_LARGE: &str = "Amount must be at most $1,000,000,000.00.";
const MSG_CATEGORY: &str = "Please select a category.";
const MSG_DATE: &str = "Please select a date.";

/// Raw, unvalidated expense input as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseForm {
    /// An empty form with the date pre-filled to today (UTC)
    pub fn new() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            date: Utc::now().date_naive().format(DATE_FORMAT).to_string(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Check every field and build the store input
    pub fn validate(&self) -> Result<NewExpense, ValidationErrors> {
        let mut errors = Vec::new();

        let description = if self.description.chars().count() >= MIN_DESCRIPTION_CHARS {
            Some(self.description.clone())
        } else {
            errors.push(FieldError::new(FIELD_DESCRIPTION, MSG_DESCRIPTION));
            None
        };

        let amount = match Money::parse(&self.amount) {
            Ok(amount) if amount > MAX_AMOUNT => {
                errors.push(FieldError::new(FIELD_AMOUNT, MSG_AMOUNT_TOO_LARGE));
                None
            }
            Ok(amount) if amount.is_positive() => Some(amount),
            _ => {
                errors.push(FieldError::new(FIELD_AMOUNT, MSG_AMOUNT));
                None
            }
        };

        let category = match self.category.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                errors.push(FieldError::new(FIELD_CATEGORY, MSG_CATEGORY));
                None
            }
        };

        let date = match NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(FIELD_DATE, MSG_DATE));
                None
            }
        };

        match (description, amount, category, date) {
            (Some(description), Some(amount), Some(category), Some(date)) => {
                Ok(NewExpense::new(description, amount, category, date))
            }
            _ => Err(ValidationErrors::from(errors)),
        }
    }
}

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors from one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The message reported for a field, if it failed
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
