//! Export module for the expense tracker
//!
//! Writes the session's expenses out in two formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: full session snapshot with metadata

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use json::{export_session_json, import_session_json, SessionExport, EXPORT_SCHEMA_VERSION};
