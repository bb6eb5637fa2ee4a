//! Closest tool — rank candidate strings by similarity to a query.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::diff::{similarity_score_with_limit, DEFAULT_MAX_LENGTH};
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::server::McpServerConfig;

/// Parameters for the closest tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosestParams {
    /// String to match candidates against.
    pub query: String,
    /// Candidate strings to rank.
    pub candidates: Vec<String>,
    /// Character-count threshold above which word splitting kicks in.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Maximum number of matches to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

const fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

const fn default_limit() -> usize {
    5
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateMatch {
    candidate: String,
    score: i32,
    distance: usize,
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "closest".to_owned(),
        description: "Rank candidate strings by similarity to a query. Returns the top \
            matches sorted by descending score, ties broken by ascending edit distance \
            and then input order."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "String to match candidates against"
                },
                "candidates": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Candidate strings to rank"
                },
                "maxLength": {
                    "type": "integer",
                    "description": "Character count above which word splitting is used (default: 50)",
                    "default": 50,
                    "minimum": 0
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of matches to return (default: 5)",
                    "default": 5,
                    "minimum": 1
                }
            },
            "required": ["query", "candidates"]
        }),
    }
}

/// Execute the closest tool.
pub fn execute(config: &McpServerConfig, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: ClosestParams =
        serde_json::from_value(arguments).context("invalid closest parameters")?;

    if let Err(e) = super::validate_input_len("query", &params.query, config.max_input_chars) {
        return Ok(ToolCallResult::error(format!("Error: {e}")));
    }
    if let Err(e) =
        super::validate_tokens_len("candidates", &params.candidates, config.max_input_chars)
    {
        return Ok(ToolCallResult::error(format!("Error: {e}")));
    }

    let mut ranked: Vec<CandidateMatch> = params
        .candidates
        .iter()
        .map(|candidate| {
            let result = similarity_score_with_limit(&params.query, candidate, params.max_length);
            CandidateMatch {
                candidate: candidate.clone(),
                score: result.score,
                distance: result.distance,
            }
        })
        .collect();

    // Stable sort keeps input order on full ties.
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.distance.cmp(&b.distance)));
    ranked.truncate(params.limit);

    Ok(super::json_result(&ranked)?)
}
