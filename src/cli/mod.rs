//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod session;
pub mod shell;

pub use session::{handle_session_command, ExportFormat, Session, SessionCommand};
pub use shell::run_shell;
