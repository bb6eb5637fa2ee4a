//! Error types for the simscore crate.

/// Simscore-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum SimscoreError {
    /// A tool string input exceeded the configured character cap.
    #[error("input too large: {name} is {len} chars (max {max})")]
    InputTooLarge {
        name: &'static str,
        len: usize,
        max: usize,
    },

    /// MCP protocol error.
    #[error("MCP protocol error: {0}")]
    Protocol(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for simscore operations.
pub type SimscoreResult<T> = Result<T, SimscoreError>;
