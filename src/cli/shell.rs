//! Interactive session
//!
//! Reads commands line by line and runs them against one store, so expenses
//! added or deleted stay that way until the session ends.

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

use super::session::{handle_session_command, Session, SessionCommand};
use crate::error::{TrackerError, TrackerResult};

const PROMPT: &str = "expenses> ";

/// One line typed into the shell
#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Session(SessionCommand),

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into words, honouring single and double quotes
pub fn tokenize(line: &str) -> TrackerResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(TrackerError::InvalidCommand(format!(
            "unterminated quote in: {}",
            line
        )));
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}

/// Run the interactive loop until `quit` or end of input
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> TrackerResult<()> {
    writeln!(
        out,
        "Expense tracker session with {} expenses. Type 'help' for commands, 'quit' to exit.",
        session.store.len()
    )?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let tokens = match tokenize(&line) {
            Ok(tokens) if tokens.is_empty() => continue,
            Ok(tokens) => tokens,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Covers `help` as well as real parse errors
                write!(out, "{}", err.render())?;
                continue;
            }
        };

        match parsed.command {
            ShellCommand::Quit => break,
            ShellCommand::Session(cmd) => {
                tracing::debug!(?cmd, "shell command");
                if let Err(err) = handle_session_command(session, cmd, out) {
                    writeln!(out, "Error: {}", err)?;
                }
            }
        }
    }

    tracing::info!(expenses = session.store.len(), "session ended");
    Ok(())
}
