//! expense-tracker - personal expense tracking with spending analytics
//!
//! This library provides the core functionality for the `expenses` command
//! line tool. Expenses live in memory for the length of a session; every
//! figure shown to the user is derived from the store on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories)
//! - `validation`: Checks on raw expense input before it reaches the store
//! - `store`: The in-memory expense store and its aggregates
//! - `reports`: Summary, category breakdown and spending trend
//! - `display`: Terminal formatting of expense listings
//! - `export`: CSV and JSON export of a session
//! - `cli`: Command handlers and the interactive shell
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use expense_tracker::models::Category;
//! use expense_tracker::store::ExpenseStore;
//! use expense_tracker::validation::ExpenseForm;
//!
//! let mut store = ExpenseStore::with_sample_data();
//! let new = ExpenseForm::new()
//!     .description("Coffee")
//!     .amount("4.50")
//!     .category("Food")
//!     .date("2024-06-01")
//!     .validate()
//!     .unwrap();
//! store.add(new);
//!
//! assert_eq!(store.len(), 6);
//! assert_eq!(store.category_totals().get(Category::Food).unwrap().cents(), 9025);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod store;
pub mod validation;

pub use error::{TrackerError, TrackerResult};
pub use store::ExpenseStore;
