//! Tool router — registers and dispatches MCP tool calls.
//!
//! Each tool is a function that takes JSON arguments and returns a
//! [`ToolCallResult`]. The router maintains the tool registry and
//! provides `list_tools()` / `call_tool()` for the MCP server.

pub mod closest;
pub mod diff;
pub mod distance;
pub mod score;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::error::{SimscoreError, SimscoreResult};
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::server::McpServerConfig;

type DefinitionFn = fn() -> ToolDefinition;
type ExecuteFn = fn(&McpServerConfig, serde_json::Value) -> Result<ToolCallResult>;

/// The registered tools, in the order tools/list reports them.
const TOOL_REGISTRY: &[(&str, DefinitionFn, ExecuteFn)] = &[
    ("score", score::tool_definition, score::execute),
    ("distance", distance::tool_definition, distance::execute),
    ("closest", closest::tool_definition, closest::execute),
    ("diff", diff::tool_definition, diff::execute),
];

/// Reject a tool string input whose character count exceeds the cap.
///
/// The engine itself is total over its inputs; the cap exists because
/// the matrix is O(m*n) and latency is bounded at the tool boundary
/// rather than inside the algorithm.
pub fn validate_input_len(name: &'static str, value: &str, max: usize) -> SimscoreResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(SimscoreError::InputTooLarge { name, len, max });
    }
    Ok(())
}

/// Reject a token array whose summed character count exceeds the cap.
pub fn validate_tokens_len(
    name: &'static str,
    tokens: &[String],
    max: usize,
) -> SimscoreResult<()> {
    let len = tokens.iter().map(|t| t.chars().count()).sum();
    if len > max {
        return Err(SimscoreError::InputTooLarge { name, len, max });
    }
    Ok(())
}

/// Serialize a tool payload as pretty-printed JSON text content.
fn json_result(payload: &impl Serialize) -> SimscoreResult<ToolCallResult> {
    Ok(ToolCallResult::text(serde_json::to_string_pretty(payload)?))
}

/// Tool router that dispatches MCP tool calls to implementations.
pub struct ToolRouter {
    /// Input caps shared by all tools.
    config: McpServerConfig,
}

impl ToolRouter {
    /// Create a new tool router.
    pub fn new(config: McpServerConfig) -> Self {
        Self { config }
    }

    /// List all available tools with their JSON Schema definitions.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        TOOL_REGISTRY
            .iter()
            .map(|&(_, definition, _)| definition())
            .collect()
    }

    /// Call a tool by name with the given JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool arguments fail to deserialize or the
    /// result cannot be serialized. An unknown tool name is reported as
    /// an error result, not an `Err`.
    pub fn call_tool(&self, name: &str, arguments: serde_json::Value) -> Result<ToolCallResult> {
        debug!(tool = name, "dispatching tool call");

        match TOOL_REGISTRY.iter().find(|&&(tool, _, _)| tool == name) {
            Some(&(_, _, execute)) => execute(&self.config, arguments),
            None => Ok(ToolCallResult::error(format!("Unknown tool: {name}"))),
        }
    }
}
