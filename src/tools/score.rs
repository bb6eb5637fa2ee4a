//! Score tool — normalized similarity between two strings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::diff::{edit_vector, similarity_score_with_limit, DEFAULT_MAX_LENGTH};
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::server::McpServerConfig;

/// Parameters for the score tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreParams {
    /// First string to compare.
    pub text_a: String,
    /// Second string to compare.
    pub text_b: String,
    /// Character-count threshold above which word splitting kicks in.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

const fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScorePayload {
    score: i32,
    distance: usize,
    /// Edit script as a tag string (ø no-change, a addition, d deletion,
    /// s substitution).
    differences: String,
    split_by: &'static str,
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "score".to_owned(),
        description: "Compute a normalized 0-100 similarity score between two strings. \
            Short inputs are compared character by character; inputs longer than \
            maxLength are chunked into words first. Also returns the edit distance \
            and the symbolic edit script."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "textA": {
                    "type": "string",
                    "description": "First string to compare"
                },
                "textB": {
                    "type": "string",
                    "description": "Second string to compare"
                },
                "maxLength": {
                    "type": "integer",
                    "description": "Character count above which word splitting is used (default: 50)",
                    "default": 50,
                    "minimum": 0
                }
            },
            "required": ["textA", "textB"]
        }),
    }
}

/// Execute the score tool.
pub fn execute(config: &McpServerConfig, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: ScoreParams =
        serde_json::from_value(arguments).context("invalid score parameters")?;

    for (name, value) in [("textA", &params.text_a), ("textB", &params.text_b)] {
        if let Err(e) = super::validate_input_len(name, value, config.max_input_chars) {
            return Ok(ToolCallResult::error(format!("Error: {e}")));
        }
    }

    let result = similarity_score_with_limit(&params.text_a, &params.text_b, params.max_length);
    let payload = ScorePayload {
        score: result.score,
        distance: result.distance,
        differences: edit_vector(&result.differences),
        split_by: result.split_by.pattern(),
    };

    Ok(super::json_result(&payload)?)
}
