//! Reports module for the expense tracker
//!
//! Plain-data views over the store: headline summary, per-category
//! breakdown and the recent spending trend.

pub mod breakdown;
pub mod summary;
pub mod trend;

pub use breakdown::{CategoryBreakdown, CategoryShare};
pub use summary::{SpendingSummary, NOT_AVAILABLE};
pub use trend::SpendingTrend;
