//! Distance tool — raw edit distance over caller-supplied token arrays.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::diff::{edit_vector, levenshtein};
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::server::McpServerConfig;

/// Parameters for the distance tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceParams {
    /// Source token sequence.
    pub tokens_a: Vec<String>,
    /// Target token sequence.
    pub tokens_b: Vec<String>,
    /// Skip the backtrace when only the count is needed.
    #[serde(default)]
    pub skip_differences: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DistancePayload {
    distance: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    differences: Option<String>,
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "distance".to_owned(),
        description: "Compute the minimum edit distance between two token arrays. \
            Tokens are compared by exact equality. Returns the distance and, unless \
            skipDifferences is set, the edit script as a tag string."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "tokensA": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Source token sequence"
                },
                "tokensB": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Target token sequence"
                },
                "skipDifferences": {
                    "type": "boolean",
                    "description": "Skip the backtrace and return only the distance (default: false)",
                    "default": false
                }
            },
            "required": ["tokensA", "tokensB"]
        }),
    }
}

/// Execute the distance tool.
pub fn execute(config: &McpServerConfig, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: DistanceParams =
        serde_json::from_value(arguments).context("invalid distance parameters")?;

    for (name, tokens) in [("tokensA", &params.tokens_a), ("tokensB", &params.tokens_b)] {
        if let Err(e) = super::validate_tokens_len(name, tokens, config.max_input_chars) {
            return Ok(ToolCallResult::error(format!("Error: {e}")));
        }
    }

    let result = levenshtein(&params.tokens_a, &params.tokens_b, params.skip_differences);
    let payload = DistancePayload {
        distance: result.distance,
        differences: result.differences.as_deref().map(edit_vector),
    };

    Ok(super::json_result(&payload)?)
}
