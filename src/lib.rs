//! `simscore` — Levenshtein edit-script engine and similarity scorer
//! behind an MCP tool server.
//!
//! The core is a dynamic-programming edit-distance engine that also
//! backtraces its matrix into a symbolic edit script, plus a scorer
//! that tokenizes two strings (by character or by word, depending on
//! length) and normalizes the distance into a 0-100 percentage. The
//! engine is exposed both as a library ([`diff`]) and over the Model
//! Context Protocol (MCP) via stdio (JSON-RPC 2.0, newline-delimited).
//!
//! # Tools
//!
//! - `score` — normalized similarity between two strings
//! - `distance` — raw edit distance over caller-supplied token arrays
//! - `closest` — rank candidates by similarity to a query
//! - `diff` — line-level unified diff between two texts
//!
//! # Architecture
//!
//! ```text
//! stdin (JSON-RPC) → McpServer → ToolRouter → diff engine
//! stdout (JSON-RPC) ←──────────────────────────────┘
//! ```

pub mod diff;
pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{SimscoreError, SimscoreResult};
pub use server::run_mcp_server;
