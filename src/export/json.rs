//! JSON Export functionality
//!
//! Exports the current session (expenses plus headline figures) with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};
use crate::store::ExpenseStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    pub metadata: ExportMetadata,

    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,
}

/// Export header: versioning plus headline figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expense_count: usize,

    pub total_spent: Money,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl SessionExport {
    /// Snapshot the store's current contents
    pub fn from_store(store: &ExpenseStore) -> Self {
        let expenses = store.expenses().to_vec();

        let metadata = ExportMetadata {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            total_spent: store.total_spent(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self { metadata, expenses }
    }

    /// Check the snapshot against the store invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.metadata.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.metadata.schema_version
            ));
        }

        let mut seen = HashSet::new();
        for expense in &self.expenses {
            if !seen.insert(&expense.id) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
            if !expense.amount.is_positive() {
                return Err(format!(
                    "Expense {} has non-positive amount {}",
                    expense.id, expense.amount
                ));
            }
        }

        Ok(())
    }
}

/// Export the session to JSON
pub fn export_session_json<W: Write>(
    store: &ExpenseStore,
    writer: W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = SessionExport::from_store(store);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_session_json(json_str: &str) -> TrackerResult<SessionExport> {
    let export: SessionExport = serde_json::from_str(json_str)?;
    export.validate().map_err(TrackerError::Export)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_store_metadata() {
        let export = SessionExport::from_store(&ExpenseStore::with_sample_data());
        assert_eq!(export.metadata.expense_count, 5);
        assert_eq!(export.metadata.total_spent, Money::from_cents(34349));
        assert_eq!(export.metadata.earliest_expense.as_deref(), Some("2024-05-05"));
        assert_eq!(export.metadata.latest_expense.as_deref(), Some("2024-05-18"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_empty_metadata() {
        let export = SessionExport::from_store(&ExpenseStore::new());
        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest_expense.is_none());
    }

    #[test]
    fn test_export_and_read_back() {
        let store = ExpenseStore::with_sample_data();
        let mut buffer = Vec::new();
        export_session_json(&store, &mut buffer, true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let export = import_session_json(&text).unwrap();
        assert_eq!(export.expenses, store.expenses());

        let rebuilt = ExpenseStore::from_expenses(export.expenses);
        assert_eq!(rebuilt.total_spent(), store.total_spent());
    }

    #[test]
    fn test_header_lives_under_metadata() {
        let mut buffer = Vec::new();
        export_session_json(&ExpenseStore::with_sample_data(), &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["metadata"]["schema_version"], EXPORT_SCHEMA_VERSION);
        assert!(value["metadata"]["exported_at"].is_string());
        assert_eq!(value["metadata"]["expense_count"], 5);
        assert!(value.get("schema_version").is_none());
        assert_eq!(value["expenses"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut export = SessionExport::from_store(&ExpenseStore::with_sample_data());
        let first = export.expenses[0].clone();
        export.expenses.push(first);
        assert!(export.validate().unwrap_err().contains("Duplicate expense id 1"));
    }

    #[test]
    fn test_validate_rejects_wrong_schema() {
        let mut export = SessionExport::from_store(&ExpenseStore::new());
        export.metadata.schema_version = "0.1".into();
        assert!(export.validate().is_err());
    }
}
