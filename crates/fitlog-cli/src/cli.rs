//! Command-line arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so validation stays in one place:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! Numbers are accepted as typed by the user, negative ones included, and
//! rejected by the core with the same messages every other front end gets.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use fitlog_core::{
    display::{CreateResult, DeleteResult, ItemDetails, OperationStatus, UpdateResult},
    import::{read_rows, write_items},
    params::{CreateItem, DateParam, DateRangeParams, Id, SetCompleted, UpdateItem},
    Tracker,
};
use jiff::Zoned;
use log::info;

use crate::renderer::TerminalRenderer;

/// Category of an item as typed on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ItemTypeArg {
    /// Food; calories count as intake
    Meal,
    /// Activity; calories count as burned
    Exercise,
}

impl ItemTypeArg {
    fn as_str(self) -> &'static str {
        match self {
            ItemTypeArg::Meal => "meal",
            ItemTypeArg::Exercise => "exercise",
        }
    }
}

/// Add a meal or an exercise
#[derive(Args)]
pub struct AddItemArgs {
    #[arg(value_enum, help = "Item category")]
    pub item_type: ItemTypeArg,
    #[arg(help = "Name of the meal or exercise")]
    pub name: String,
    #[arg(
        allow_negative_numbers = true,
        help = "Calories eaten (meal) or burned (exercise)"
    )]
    pub calories: f64,
    #[arg(short, long, help = "Date of the item as YYYY-MM-DD (defaults to today)")]
    pub date: Option<String>,
    #[arg(
        short = 't',
        long,
        allow_negative_numbers = true,
        help = "Planned duration in minutes"
    )]
    pub duration: Option<i64>,
    #[arg(long, help = "Record the item as already completed")]
    pub completed: bool,
}

impl From<AddItemArgs> for CreateItem {
    fn from(val: AddItemArgs) -> Self {
        CreateItem {
            date: val.date.unwrap_or_else(today),
            item_type: val.item_type.as_str().to_string(),
            name: val.name,
            calories: val.calories,
            duration: val.duration,
            actual_duration: None,
            completed: val.completed,
        }
    }
}

/// Change fields of an existing item
#[derive(Args)]
pub struct UpdateItemArgs {
    #[arg(help = "ID of the item to update")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, allow_negative_numbers = true, help = "New calories value")]
    pub calories: Option<f64>,
    #[arg(
        short = 't',
        long,
        allow_negative_numbers = true,
        conflicts_with = "clear_duration",
        help = "New planned duration in minutes"
    )]
    pub duration: Option<i64>,
    #[arg(long, help = "Remove the planned duration")]
    pub clear_duration: bool,
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with = "clear_actual_duration",
        help = "New actual duration in minutes (exercises only)"
    )]
    pub actual_duration: Option<i64>,
    #[arg(long, help = "Remove the recorded actual duration")]
    pub clear_actual_duration: bool,
    #[arg(long, help = "New completion state (true or false)")]
    pub completed: Option<bool>,
}

impl UpdateItemArgs {
    /// Human-readable list of the requested changes.
    fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Name: {}", name.trim()));
        }
        if let Some(calories) = self.calories {
            changes.push(format!("Calories: {calories}"));
        }
        if let Some(duration) = self.duration {
            changes.push(format!("Duration: {duration} min"));
        }
        if self.clear_duration {
            changes.push("Duration: cleared".to_string());
        }
        if let Some(actual) = self.actual_duration {
            changes.push(format!("Actual duration: {actual} min"));
        }
        if self.clear_actual_duration {
            changes.push("Actual duration: cleared".to_string());
        }
        if let Some(completed) = self.completed {
            changes.push(format!("Completed: {completed}"));
        }
        changes
    }
}

impl From<UpdateItemArgs> for UpdateItem {
    fn from(val: UpdateItemArgs) -> Self {
        UpdateItem {
            id: val.id,
            name: val.name,
            calories: val.calories,
            duration: clearable(val.duration, val.clear_duration),
            actual_duration: clearable(val.actual_duration, val.clear_actual_duration),
            completed: val.completed,
        }
    }
}

fn clearable(value: Option<i64>, clear: bool) -> Option<Option<i64>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

/// Mark an item as completed
#[derive(Args)]
pub struct CompleteItemArgs {
    #[arg(help = "ID of the item to complete")]
    pub id: u64,
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        help = "Minutes actually spent (exercises only)"
    )]
    pub actual_duration: Option<i64>,
}

impl From<CompleteItemArgs> for SetCompleted {
    fn from(val: CompleteItemArgs) -> Self {
        SetCompleted {
            id: val.id,
            completed: true,
            actual_duration: val.actual_duration,
        }
    }
}

/// Arguments naming a single item
#[derive(Args)]
pub struct ItemIdArgs {
    #[arg(help = "ID of the item")]
    pub id: u64,
}

impl From<ItemIdArgs> for Id {
    fn from(val: ItemIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a meal or an exercise
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// Change fields of an existing item
    #[command(alias = "u")]
    Update(UpdateItemArgs),
    /// Delete an item permanently
    #[command(aliases = ["d", "rm"])]
    Delete(ItemIdArgs),
    /// Mark an item as completed
    #[command(alias = "c")]
    Complete(CompleteItemArgs),
    /// Mark an item as pending again
    Uncomplete(ItemIdArgs),
    /// Show all fields of an item
    #[command(alias = "s")]
    Show(ItemIdArgs),
}

/// Optional date argument, today when omitted
#[derive(Args)]
pub struct DateArgs {
    #[arg(help = "Date as YYYY-MM-DD (defaults to today)")]
    pub date: Option<String>,
}

impl From<DateArgs> for DateParam {
    fn from(val: DateArgs) -> Self {
        DateParam {
            date: val.date.unwrap_or_else(today),
        }
    }
}

/// Optional inclusive date range
#[derive(Args)]
pub struct RangeArgs {
    #[arg(long, help = "First date to include (YYYY-MM-DD)")]
    pub start: Option<String>,
    #[arg(long, help = "Last date to include (YYYY-MM-DD)")]
    pub end: Option<String>,
}

impl From<RangeArgs> for DateRangeParams {
    fn from(val: RangeArgs) -> Self {
        DateRangeParams {
            start_date: val.start,
            end_date: val.end,
        }
    }
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List every date that has items, with per-date totals
    #[command(aliases = ["l", "ls"])]
    List(RangeArgs),
    /// Aggregate statistics over a range
    #[command(alias = "s")]
    Stats(RangeArgs),
}

/// Import sheet rows from a JSON file
#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "JSON file holding an array of rows with date, type, name, calories and duration")]
    pub file: PathBuf,
}

/// Write stored items as JSON
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub range: RangeArgs,
    #[arg(short, long, help = "File to write (defaults to stdout)")]
    pub output: Option<PathBuf>,
}

fn today() -> String {
    Zoned::now().date().to_string()
}

/// Runs CLI commands against a tracker and renders the results.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let item = self
                    .tracker
                    .create_item(&args.into())
                    .await
                    .context("Failed to add item")?;
                self.renderer.render(&CreateResult::new(item).to_string())
            }
            ItemCommands::Update(args) => {
                let changes = args.changes();
                let item = self
                    .tracker
                    .update_item(&args.into())
                    .await
                    .context("Failed to update item")?;
                self.renderer
                    .render(&UpdateResult::with_changes(item, changes).to_string())
            }
            ItemCommands::Delete(args) => {
                let item = self
                    .tracker
                    .delete_item(&args.into())
                    .await
                    .context("Failed to delete item")?;
                self.renderer.render(&DeleteResult::new(item).to_string())
            }
            ItemCommands::Complete(args) => self.set_completed(args.into()).await,
            ItemCommands::Uncomplete(args) => {
                self.set_completed(SetCompleted {
                    id: args.id,
                    completed: false,
                    actual_duration: None,
                })
                .await
            }
            ItemCommands::Show(args) => {
                let item = self
                    .tracker
                    .require_item(&args.into())
                    .await
                    .context("Failed to show item")?;
                self.renderer.render(&ItemDetails(&item).to_string())
            }
        }
    }

    async fn set_completed(&self, params: SetCompleted) -> Result<()> {
        let item = self
            .tracker
            .set_completed(&params)
            .await
            .context("Failed to change completion")?;

        let state = if item.completed { "completed" } else { "pending" };
        let status = OperationStatus::success(format!("Item {} is {state}", item.id));
        self.renderer.render(&status.to_string())
    }

    pub async fn show_day(&self, args: DateArgs) -> Result<()> {
        let plan = self
            .tracker
            .get_day(&args.into())
            .await
            .context("Failed to load plan")?;
        self.renderer.render(&plan.to_string())
    }

    pub async fn show_stats(&self, args: DateArgs) -> Result<()> {
        let stats = self
            .tracker
            .daily_stats(&args.into())
            .await
            .context("Failed to compute statistics")?;
        self.renderer.render(&stats.to_string())
    }

    pub async fn handle_history_command(&self, command: HistoryCommands) -> Result<()> {
        match command {
            HistoryCommands::List(args) => {
                let summaries = self
                    .tracker
                    .list_dates(&args.into())
                    .await
                    .context("Failed to list history")?;
                self.renderer.render(&summaries.to_string())
            }
            HistoryCommands::Stats(args) => {
                let stats = self
                    .tracker
                    .range_stats(&args.into())
                    .await
                    .context("Failed to compute range statistics")?;
                self.renderer.render(&stats.to_string())
            }
        }
    }

    pub async fn import_file(&self, args: ImportArgs) -> Result<()> {
        let file = File::open(&args.file)
            .with_context(|| format!("Failed to open {}", args.file.display()))?;
        let rows = read_rows(BufReader::new(file))
            .with_context(|| format!("Failed to read rows from {}", args.file.display()))?;

        info!("Importing {} rows from {}", rows.len(), args.file.display());

        let report = self
            .tracker
            .import_rows(rows)
            .await
            .context("Failed to import rows")?;
        self.renderer.render(&report.to_string())
    }

    pub async fn export_file(&self, args: ExportArgs) -> Result<()> {
        let items = self
            .tracker
            .export_items(&args.range.into())
            .await
            .context("Failed to load items for export")?;

        match &args.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_items(BufWriter::new(file), &items)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Exported {} items to {}", items.len(), path.display());
            }
            None => {
                write_items(io::stdout().lock(), &items).context("Failed to write items")?;
            }
        }
        Ok(())
    }
}
