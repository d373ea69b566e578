//! MCP wrappers around the core parameter types.
//!
//! Core parameters already derive `JsonSchema` behind the `schema` feature.
//! [`McpParams`] passes serde and schema generation straight through so the
//! tool signatures can name the core types without redefining them.

use fitlog_core::params as core;
use rmcp::{model::CallToolResult, ErrorData};
use schemars::JsonSchema;
use serde::Deserialize;

/// Transparent MCP wrapper for a core parameter type.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateItem = McpParams<core::CreateItem>;
pub type UpdateItem = McpParams<core::UpdateItem>;
pub type SetCompleted = McpParams<core::SetCompleted>;
pub type DateParam = McpParams<core::DateParam>;
pub type DateRangeParams = McpParams<core::DateRangeParams>;
pub type ApplyPlan = McpParams<core::ApplyPlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;
