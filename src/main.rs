use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

use expense_tracker::cli::{handle_session_command, run_shell, Session, SessionCommand};
use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::logging;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Track expenses and analyze your spending habits",
    long_about = "expenses records expenses (description, amount, category, date), \
                  lets you search and filter them, and summarizes where the money went. \
                  Each run starts from a small sample data set; use `expenses shell` \
                  to keep one session going across many commands."
)]
struct Cli {
    /// Start with no expenses instead of the sample data
    #[arg(long, global = true)]
    empty: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Session(SessionCommand),

    /// Start an interactive session
    #[command(alias = "repl")]
    Shell,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_level, cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Session(cmd)) => {
            let mut session = Session::start(settings, cli.empty);
            handle_session_command(&mut session, cmd, &mut out)?;
        }
        Some(Commands::Shell) => {
            let mut session = Session::start(settings, cli.empty);
            let stdin = io::stdin();
            run_shell(&mut session, stdin.lock(), &mut out)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                writeln!(out, "Wrote {}", paths.settings_file().display())?;
                writeln!(out)?;
            }
            writeln!(out, "Expense Tracker Configuration")?;
            writeln!(out, "=============================")?;
            writeln!(out, "Config directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Currency symbol:  {}", settings.currency_symbol)?;
            writeln!(out, "  Date format:      {}", settings.date_format)?;
            writeln!(out, "  Trend window:     {}", settings.trend_window)?;
            writeln!(out, "  Seed sample data: {}", settings.seed_sample_data)?;
            writeln!(out, "  Log level:        {}", settings.log_level)?;
        }
        None => {
            writeln!(out, "expenses - track your expenses and spending habits")?;
            writeln!(out)?;
            writeln!(out, "Run 'expenses --help' for usage information.")?;
            writeln!(out, "Run 'expenses shell' to start an interactive session.")?;
        }
    }

    out.flush()?;
    Ok(())
}
