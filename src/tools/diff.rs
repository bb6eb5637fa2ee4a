//! Diff tool — unified diff between two texts.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::diff::unified_diff;
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::server::McpServerConfig;

/// Parameters for the diff tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffParams {
    /// Original text.
    pub text_a: String,
    /// Modified text.
    pub text_b: String,
    /// Label used in the diff header.
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_label() -> String {
    "text".to_owned()
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "diff".to_owned(),
        description: "Render a line-level unified diff between two texts using the \
            Patience algorithm. Human-readable companion to the symbolic edit script \
            returned by score and distance."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "textA": {
                    "type": "string",
                    "description": "Original text"
                },
                "textB": {
                    "type": "string",
                    "description": "Modified text"
                },
                "label": {
                    "type": "string",
                    "description": "Label used in the diff header (default: \"text\")",
                    "default": "text"
                }
            },
            "required": ["textA", "textB"]
        }),
    }
}

/// Execute the diff tool.
pub fn execute(config: &McpServerConfig, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: DiffParams =
        serde_json::from_value(arguments).context("invalid diff parameters")?;

    for (name, value) in [("textA", &params.text_a), ("textB", &params.text_b)] {
        if let Err(e) = super::validate_input_len(name, value, config.max_input_chars) {
            return Ok(ToolCallResult::error(format!("Error: {e}")));
        }
    }

    let diff = unified_diff(&params.label, &params.text_a, &params.text_b);
    if diff.is_empty() {
        return Ok(ToolCallResult::text("No differences."));
    }

    Ok(ToolCallResult::text(diff))
}
