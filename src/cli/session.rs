//! Session commands
//!
//! A `Session` pairs the expense store with the user's settings. The same
//! commands run one-shot from the command line or repeatedly inside the
//! interactive shell.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::display::{
    format_added_message, format_category_choices, format_expense_details, format_expense_list,
    DisplayStyle,
};
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_expenses_csv, export_session_json, import_session_json};
use crate::models::{CategoryFilter, ExpenseId, NewExpense};
use crate::reports::{CategoryBreakdown, SpendingSummary, SpendingTrend};
use crate::store::{ExpenseFilter, ExpenseStore};
use crate::validation::ExpenseForm;

/// Output formats for `export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Commands that operate on a session's expenses
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// List expenses, optionally searching and filtering by category
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text to look for in descriptions
        #[arg(short, long, default_value = "")]
        search: String,
        /// Category name, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g. "4.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category (Food, Housing, Transportation, Entertainment, Utilities,
        /// Healthcare, Personal, Education, Other)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },
    /// Delete an expense
    #[command(visible_alias = "rm", alias = "delete")]
    Remove {
        /// Expense ID
        id: String,
    },
    /// Total, average, highest, lowest and most common category
    Summary,
    /// Spending per category
    Breakdown {
        /// Print as CSV instead of a table
        #[arg(long)]
        csv: bool,
        /// Only show the N categories with the most spending
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
    /// Daily spending over the most recent expenses
    Trend {
        /// Number of recent expenses to include
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// List categories, marking those in use
    Categories,
    /// Export expenses
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Add the expenses from a JSON export to this session
    Import {
        /// JSON file written by `export --format json`
        path: PathBuf,
    },
}

/// A store plus the settings used to present it
#[derive(Debug, Clone)]
pub struct Session {
    pub store: ExpenseStore,
    pub settings: Settings,
}

impl Session {
    /// Start a session, seeded unless the settings or `empty` say otherwise
    pub fn start(settings: Settings, empty: bool) -> Self {
        let store = if settings.seed_sample_data && !empty {
            ExpenseStore::with_sample_data()
        } else {
            ExpenseStore::new()
        };
        tracing::info!(expenses = store.len(), "session started");
        Self { store, settings }
    }

    fn style(&self) -> DisplayStyle<'_> {
        DisplayStyle {
            currency: &self.settings.currency_symbol,
            date_format: &self.settings.date_format,
        }
    }
}

/// Run one command against the session, writing results to `out`
pub fn handle_session_command<W: Write>(
    session: &mut Session,
    cmd: SessionCommand,
    out: &mut W,
) -> TrackerResult<()> {
    let currency = session.settings.currency_symbol.clone();

    match cmd {
        SessionCommand::List { search, category } => {
            let filter = ExpenseFilter::new().search(search).category(category);
            let found = session.store.filter(&filter);
            write!(
                out,
                "{}",
                format_expense_list(&found, filter.is_active(), session.style())
            )?;
        }

        SessionCommand::Add {
            description,
            amount,
            category,
            date,
        } => {
            let mut form = ExpenseForm::new()
                .description(description)
                .amount(amount)
                .category(category.unwrap_or_default());
            if let Some(date) = date {
                form = form.date(date);
            }

            let new = form.validate()?;
            let created = session.store.add(new);
            writeln!(out, "{}", format_added_message(&created, &currency))?;
        }

        SessionCommand::Show { id } => {
            let id = ExpenseId::new(id.trim());
            let expense = session
                .store
                .get(&id)
                .ok_or_else(|| TrackerError::expense_not_found(id.as_str()))?;
            write!(out, "{}", format_expense_details(expense, session.style()))?;
        }

        SessionCommand::Remove { id } => {
            let id = ExpenseId::new(id.trim());
            match session.store.remove(&id) {
                Some(removed) => writeln!(
                    out,
                    "Deleted expense {}: {}",
                    removed.id, removed.description
                )?,
                None => writeln!(out, "No expense with id {}; nothing to delete.", id)?,
            }
        }

        SessionCommand::Summary => {
            let summary = SpendingSummary::generate(&session.store);
            write!(out, "{}", summary.format_terminal(&currency))?;
        }

        SessionCommand::Breakdown { csv, top } => {
            let mut breakdown = CategoryBreakdown::generate(&session.store);
            if let Some(limit) = top {
                breakdown.rows = breakdown.top_categories(limit).into_iter().cloned().collect();
            }
            if csv {
                breakdown.export_csv(&mut *out)?;
            } else {
                write!(out, "{}", breakdown.format_terminal(&currency))?;
            }
        }

        SessionCommand::Trend { count } => {
            let window = count.unwrap_or(session.settings.trend_window);
            let trend = SpendingTrend::generate(&session.store, window);
            write!(out, "{}", trend.format_terminal(&currency))?;
        }

        SessionCommand::Categories => {
            write!(
                out,
                "{}",
                format_category_choices(&session.store.categories_in_use())
            )?;
        }

        SessionCommand::Export { format, output } => match output {
            Some(path) => {
                let file = File::create(&path)?;
                let mut writer = BufWriter::new(file);
                export_to(&session.store, format, &mut writer)?;
                writer.flush()?;
                writeln!(
                    out,
                    "Exported {} expenses to {}",
                    session.store.len(),
                    path.display()
                )?;
            }
            None => export_to(&session.store, format, &mut *out)?,
        },

        SessionCommand::Import { path } => {
            let contents = std::fs::read_to_string(&path)?;
            let export = import_session_json(&contents)?;
            let count = export.expenses.len();
            // Imported rows get fresh ids so they can't collide with this session's
            for expense in export.expenses {
                session.store.add(NewExpense::new(
                    expense.description,
                    expense.amount,
                    expense.category,
                    expense.date,
                ));
            }
            writeln!(out, "Imported {} expenses from {}", count, path.display())?;
        }
    }

    Ok(())
}

fn export_to<W: Write>(store: &ExpenseStore, format: ExportFormat, writer: W) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(store.expenses(), writer),
        ExportFormat::Json => {
            let mut writer = writer;
            export_session_json(store, &mut writer, true)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn run(session: &mut Session, cmd: SessionCommand) -> TrackerResult<String> {
        let mut out = Vec::new();
        handle_session_command(session, cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn seeded() -> Session {
        Session::start(Settings::default(), false)
    }

    #[test]
    fn test_start_respects_seed_settings() {
        assert_eq!(seeded().store.len(), 5);
        assert!(Session::start(Settings::default(), true).store.is_empty());

        let settings = Settings {
            seed_sample_data: false,
            ..Settings::default()
        };
        assert!(Session::start(settings, false).store.is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let mut session = seeded();
        let output = run(
            &mut session,
            SessionCommand::Add {
                description: "Coffee".into(),
                amount: "4.50".into(),
                category: Some("food".into()),
                date: Some("2024-06-01".into()),
            },
        )
        .unwrap();
        assert!(output.starts_with("Expense added: $4.50 for Coffee"));
        assert_eq!(session.store.len(), 6);
        assert_eq!(
            session.store.category_totals().get(Category::Food).unwrap().cents(),
            9025
        );

        let listing = run(
            &mut session,
            SessionCommand::List {
                search: "coffee".into(),
                category: CategoryFilter::All,
            },
        )
        .unwrap();
        assert!(listing.contains("Coffee"));
        assert!(!listing.contains("Groceries"));
    }

    #[test]
    fn test_add_invalid_input_is_rejected() {
        let mut session = seeded();
        let err = run(
            &mut session,
            SessionCommand::Add {
                description: "C".into(),
                amount: "-1".into(),
                category: None,
                date: None,
            },
        )
        .unwrap_err();

        assert!(err.is_validation());
        let message = err.to_string();
        assert!(message.contains("Description must be at least 2 characters."));
        assert!(message.contains("Amount must be a positive number."));
        assert!(message.contains("Please select a category."));
        assert_eq!(session.store.len(), 5);
    }

    #[test]
    fn test_remove_twice() {
        let mut session = seeded();
        let first = run(&mut session, SessionCommand::Remove { id: "1".into() }).unwrap();
        assert_eq!(first, "Deleted expense 1: Groceries\n");

        let second = run(&mut session, SessionCommand::Remove { id: "1".into() }).unwrap();
        assert_eq!(second, "No expense with id 1; nothing to delete.\n");
        assert_eq!(session.store.len(), 4);
    }

    #[test]
    fn test_show_missing_is_not_found() {
        let mut session = seeded();
        let err = run(&mut session, SessionCommand::Show { id: "nope".into() }).unwrap_err();
        assert!(err.is_not_found());

        let found = run(&mut session, SessionCommand::Show { id: "4".into() }).unwrap();
        assert!(found.contains("Gas"));
        assert!(found.contains("Transportation"));
    }

    #[test]
    fn test_list_empty_filter_hint() {
        let mut session = seeded();
        let output = run(
            &mut session,
            SessionCommand::List {
                search: String::new(),
                category: CategoryFilter::Only(Category::Housing),
            },
        )
        .unwrap();
        assert!(output.contains("Try changing your search or filter criteria"));
    }

    #[test]
    fn test_trend_uses_configured_window() {
        let settings = Settings {
            trend_window: 2,
            ..Settings::default()
        };
        let mut session = Session::start(settings, false);
        let output = run(&mut session, SessionCommand::Trend { count: None }).unwrap();
        assert!(output.contains("last 2 expenses"));
        assert!(output.contains("May 18"));
        assert!(!output.contains("May 10"));
    }

    #[test]
    fn test_breakdown_csv() {
        let mut session = seeded();
        let output = run(&mut session, SessionCommand::Breakdown {
                csv: true,
                top: None,
            },).unwrap();
        assert!(output.starts_with("Category,Amount,Count,Percentage\n"));
        assert!(output.contains("Utilities,180.49,2,"));
    }

    #[test]
    fn test_export_json_to_stdout() {
        let mut session = seeded();
        let output = run(
            &mut session,
            SessionCommand::Export {
                format: ExportFormat::Json,
                output: None,
            },
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["metadata"]["expense_count"], 5);
    }

    #[test]
    fn test_export_csv_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("expenses.csv");
        let mut session = seeded();
        let output = run(
            &mut session,
            SessionCommand::Export {
                format: ExportFormat::Csv,
                output: Some(path.clone()),
            },
        )
        .unwrap();
        assert!(output.starts_with("Exported 5 expenses to"));

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.lines().count(), 6);
    }

    #[test]
    fn test_breakdown_top_categories() {
        let mut session = seeded();
        let output = run(
            &mut session,
            SessionCommand::Breakdown {
                csv: false,
                top: Some(1),
            },
        )
        .unwrap();
        assert!(output.contains("Utilities"));
        assert!(!output.contains("Food"));
        assert!(output.contains("$343.49"));
    }

    #[test]
    fn test_import_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut source = seeded();
        run(
            &mut source,
            SessionCommand::Export {
                format: ExportFormat::Json,
                output: Some(path.clone()),
            },
        )
        .unwrap();

        let mut target = Session::start(Settings::default(), true);
        let output = run(&mut target, SessionCommand::Import { path: path.clone() }).unwrap();
        assert!(output.starts_with("Imported 5 expenses from"));
        assert_eq!(target.store.total_spent(), source.store.total_spent());

        // Importing into a seeded session never reuses an existing id
        run(&mut source, SessionCommand::Import { path }).unwrap();
        assert_eq!(source.store.len(), 10);
        assert_eq!(source.store.total_spent().cents(), 2 * 34349);
    }

    #[test]
    fn test_import_rejects_invalid_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"metadata": {}, "expenses": []}"#).unwrap();

        let mut session = seeded();
        assert!(run(&mut session, SessionCommand::Import { path }).is_err());
        assert_eq!(session.store.len(), 5);
    }
}
