//! fitlog command-line application
//!
//! Plans meals and exercises per date from the terminal, or serves the same
//! tracker to AI assistants over MCP with `fitlog serve`.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, DateArgs};
use fitlog_core::TrackerBuilder;
use log::info;
use mcp::{run_stdio_server, FitlogMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("fitlog started with {}", tracker.database_path().display());

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Item { command }) => {
            Cli::new(tracker, renderer)
                .handle_item_command(command)
                .await
        }
        Some(Day(args)) => Cli::new(tracker, renderer).show_day(args).await,
        Some(Stats(args)) => Cli::new(tracker, renderer).show_stats(args).await,
        Some(History { command }) => {
            Cli::new(tracker, renderer)
                .handle_history_command(command)
                .await
        }
        Some(Import(args)) => Cli::new(tracker, renderer).import_file(args).await,
        Some(Export(args)) => Cli::new(tracker, renderer).export_file(args).await,
        Some(Serve) => {
            info!("Starting fitlog MCP server");
            run_stdio_server(FitlogMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(tracker, renderer)
                .show_day(DateArgs { date: None })
                .await
        }
    }
}
