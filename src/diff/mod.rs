//! Edit-distance engine and similarity scoring.
//!
//! The engine computes a minimum-edit-distance matrix over two token
//! sequences and backtraces it into a symbolic edit script; the scorer
//! wraps it with tokenization and percentage normalization.
//!
//! # Architecture
//!
//! - [`levenshtein`] — matrix construction, distance, backtrace
//! - [`ops`] — [`EditOp`] tags, edit vectors, script replay
//! - [`score`] — tokenization policy and normalized scoring
//! - [`unified`] — line-level unified diff rendering
//!
//! Everything here is pure and stateless: each call allocates its own
//! matrix and result, so concurrent use needs no synchronization.

pub mod levenshtein;
pub mod ops;
pub mod score;
pub mod unified;

pub use levenshtein::{backtrace, distance, levenshtein, LevenshteinResult};
pub use ops::{apply, edit_vector, EditOp};
pub use score::{
    similarity_score, similarity_score_with_limit, split_words, SimilarityScore, SplitBy,
    DEFAULT_MAX_LENGTH,
};
pub use unified::unified_diff;
