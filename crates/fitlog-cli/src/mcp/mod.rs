//! MCP server implementation for fitlog
//!
//! Exposes the tracker to AI assistants over the Model Context Protocol.
//! Every tool returns the same markdown the CLI prints, so an assistant sees
//! exactly what a person would.

use anyhow::Result;
use fitlog_core::{
    display::{CreateResult, DeleteResult, ItemDetails, OperationStatus, UpdateResult},
    Tracker,
};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod params;

use errors::to_mcp_error;
pub use params::{
    ApplyPlan, CreateItem, DateParam, DateRangeParams, Id, McpResult, SetCompleted, UpdateItem,
};

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// MCP server for fitlog
#[derive(Clone)]
pub struct FitlogMcpServer {
    tracker: Tracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FitlogMcpServer {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "add_item",
        description = "Add a meal or exercise to the plan of a date. Requires date (YYYY-MM-DD), type ('meal' or 'exercise'), name and calories (eaten for meals, burned for exercises; never negative). Exercises may carry a planned duration in minutes. Returns the new item ID."
    )]
    async fn add_item(&self, Parameters(params): Parameters<CreateItem>) -> McpResult {
        debug!("add_item: {params:?}");

        let item = self
            .tracker
            .create_item(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add item", &e))?;

        text(CreateResult::new(item))
    }

    #[tool(
        name = "update_item",
        description = "Change fields of an existing item by ID: name, calories, duration, actual_duration or completed. Omitted fields keep their value; duration or actual_duration set to null clears it. The type of an item cannot be changed."
    )]
    async fn update_item(&self, Parameters(params): Parameters<UpdateItem>) -> McpResult {
        debug!("update_item: {params:?}");

        let item = self
            .tracker
            .update_item(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update item", &e))?;

        text(UpdateResult::new(item))
    }

    #[tool(
        name = "delete_item",
        description = "Permanently delete an item by ID. This cannot be undone."
    )]
    async fn delete_item(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_item: {params:?}");

        let item = self
            .tracker
            .delete_item(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete item", &e))?;

        text(DeleteResult::new(item))
    }

    #[tool(
        name = "set_completed",
        description = "Mark an item as completed (completed=true) or pending again (completed=false). When completing an exercise, actual_duration records the minutes actually spent and replaces the planned duration in statistics. Repeating the same call changes nothing."
    )]
    async fn set_completed(&self, Parameters(params): Parameters<SetCompleted>) -> McpResult {
        debug!("set_completed: {params:?}");

        let inner = params.as_ref();
        let item = self
            .tracker
            .set_completed(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to set completion", &e))?;

        let state = if item.completed { "completed" } else { "pending" };
        let status = OperationStatus::success(format!("Item {} is {state}", item.id));
        text(format!("{status}\n{}", ItemDetails(&item)))
    }

    #[tool(
        name = "show_day",
        description = "Show every meal and exercise planned for a date (YYYY-MM-DD), with IDs, calories, durations and completion state."
    )]
    async fn show_day(&self, Parameters(params): Parameters<DateParam>) -> McpResult {
        debug!("show_day: {params:?}");

        let plan = self
            .tracker
            .get_day(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load day", &e))?;

        text(plan)
    }

    #[tool(
        name = "daily_stats",
        description = "Calorie and completion statistics for a date (YYYY-MM-DD): calories eaten, burned and net, exercise minutes, and the share of completed items."
    )]
    async fn daily_stats(&self, Parameters(params): Parameters<DateParam>) -> McpResult {
        debug!("daily_stats: {params:?}");

        let stats = self
            .tracker
            .daily_stats(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute statistics", &e))?;

        text(stats)
    }

    #[tool(
        name = "list_history",
        description = "List every date with at least one item between optional start_date and end_date (inclusive, YYYY-MM-DD), with meal and exercise counts and calorie totals per date."
    )]
    async fn list_history(&self, Parameters(params): Parameters<DateRangeParams>) -> McpResult {
        debug!("list_history: {params:?}");

        let summaries = self
            .tracker
            .list_dates(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list history", &e))?;

        text(summaries)
    }

    #[tool(
        name = "range_stats",
        description = "Aggregate statistics between optional start_date and end_date (inclusive, YYYY-MM-DD): training days, total and average calories burned and exercise minutes, and the average of the daily completion rates."
    )]
    async fn range_stats(&self, Parameters(params): Parameters<DateRangeParams>) -> McpResult {
        debug!("range_stats: {params:?}");

        let stats = self
            .tracker
            .range_stats(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute range statistics", &e))?;

        text(stats)
    }

    #[tool(
        name = "apply_plan",
        description = "Create several draft items at once after the user confirmed them. Each entry has the same fields as add_item. Valid entries are created even when others are rejected; the result lists created items and rejected entries by their 1-based position."
    )]
    async fn apply_plan(&self, Parameters(params): Parameters<ApplyPlan>) -> McpResult {
        debug!("apply_plan: {} items", params.as_ref().items.len());

        let report = self
            .tracker
            .apply_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to apply plan", &e))?;

        text(report)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FitlogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitlog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"fitlog records meals and exercises per calendar date and derives calorie statistics from them.

## Core Concepts
- **Items**: a meal (calories eaten) or an exercise (calories burned, optional duration in minutes) on a date
- **Completion**: each item is pending or completed; completing an exercise may record the minutes actually spent
- **Statistics**: always recomputed from the stored items; nothing needs refreshing

## Workflow
1. Review a date with `show_day`
2. Propose meals and exercises to the user; once confirmed, store them with `apply_plan` (or `add_item` one by one)
3. Track progress with `set_completed`
4. Report with `daily_stats`, `list_history` and `range_stats`

Dates are always YYYY-MM-DD. Calories and durations must not be negative."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: FitlogMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting fitlog MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
