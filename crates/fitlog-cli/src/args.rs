use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DateArgs, ExportArgs, HistoryCommands, ImportArgs, ItemCommands};

/// Plan meals and exercise per day and track calories and completion.
///
/// Without a subcommand, today's plan is shown. `serve` starts an MCP server
/// on stdio so AI assistants can read and update the same data.
#[derive(Parser)]
#[command(version, about, name = "fitlog")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/fitlog/fitlog.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add, change, complete or remove meals and exercises
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Show the plan of a date (today by default)
    #[command(alias = "d")]
    Day(DateArgs),
    /// Show calorie and completion statistics of a date (today by default)
    #[command(alias = "s")]
    Stats(DateArgs),
    /// Summaries across dates
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Import items from a JSON file of sheet rows
    Import(ImportArgs),
    /// Export stored items as JSON, optionally limited to a date range
    Export(ExportArgs),
    /// Start the MCP server
    Serve,
}
