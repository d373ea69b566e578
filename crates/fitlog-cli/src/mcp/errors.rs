//! Error handling utilities for MCP server

use fitlog_core::TrackerError;
use rmcp::ErrorData;

/// Convert a tracker error into an MCP error.
///
/// Caller mistakes (invalid fields, unknown ids) become `invalid_params` so
/// the assistant can correct its request; everything else is internal.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_client_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
