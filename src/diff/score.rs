//! Similarity scoring over tokenized strings.
//!
//! Short inputs are compared character by character; once either side
//! exceeds the length threshold, both are chunked into word-like tokens
//! so the distance matrix stays small. The distance is then normalized
//! into a percentage.

use std::sync::LazyLock;

use regex::Regex;

use super::levenshtein::{levenshtein, LevenshteinResult};
use super::ops::EditOp;

/// Default character-count threshold above which inputs are compared
/// word by word instead of character by character.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// ASCII non-word characters; a token boundary sits before each one.
/// Locale-naive on purpose: accented letters count as boundaries.
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]").expect("word boundary pattern is valid"));

/// Tokenization granularity chosen by [`similarity_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitBy {
    /// Character-level tokens; the empty-string delimiter.
    Characters,
    /// Word-level tokens; a boundary before each run of non-word characters.
    Words,
}

impl SplitBy {
    /// The delimiter pattern as callers see it: `""` for characters,
    /// the lookahead pattern for words.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Characters => "",
            Self::Words => r"(?=\W)",
        }
    }
}

/// Normalized similarity between two strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityScore {
    /// Percentage similarity. Not clamped: highly dissimilar inputs of
    /// uneven token counts can score below zero.
    pub score: i32,
    /// Edit distance over the chosen tokens.
    pub distance: usize,
    /// Edit script over the chosen tokens.
    pub differences: Vec<EditOp>,
    /// Tokenization granularity that was applied.
    pub split_by: SplitBy,
}

/// Score two strings with the default length threshold.
pub fn similarity_score(a: &str, b: &str) -> SimilarityScore {
    similarity_score_with_limit(a, b, DEFAULT_MAX_LENGTH)
}

/// Score two strings, switching to word tokens once either side's
/// character count exceeds `max_length`.
///
/// Equal inputs short-circuit to a 100 score without tokenizing. The
/// score is `floor(100 - 100 * 2d / (len_a + len_b))` over token
/// counts. Total over all inputs, including empty strings.
pub fn similarity_score_with_limit(a: &str, b: &str, max_length: usize) -> SimilarityScore {
    if a == b {
        return SimilarityScore {
            score: 100,
            distance: 0,
            differences: vec![EditOp::NoChange; a.chars().count()],
            split_by: SplitBy::Characters,
        };
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a > max_length || len_b > max_length {
        let tokens_a = split_words(a);
        let tokens_b = split_words(b);
        let result = levenshtein(&tokens_a, &tokens_b, false);
        normalize(result, tokens_a.len(), tokens_b.len(), SplitBy::Words)
    } else {
        let tokens_a: Vec<char> = a.chars().collect();
        let tokens_b: Vec<char> = b.chars().collect();
        let result = levenshtein(&tokens_a, &tokens_b, false);
        normalize(result, tokens_a.len(), tokens_b.len(), SplitBy::Characters)
    }
}

/// Split into word-like tokens: a boundary before every non-word
/// character, delimiters attached to the following token, and a
/// boundary at position 0 ignored. The empty string yields one empty
/// token.
pub fn split_words(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for m in WORD_BOUNDARY.find_iter(s) {
        if m.start() > start {
            tokens.push(&s[start..m.start()]);
            start = m.start();
        }
    }
    tokens.push(&s[start..]);
    tokens
}

fn normalize(
    result: LevenshteinResult,
    len_a: usize,
    len_b: usize,
    split_by: SplitBy,
) -> SimilarityScore {
    // len_a + len_b > 0 here: equal inputs (including both-empty) take
    // the fast path above, and word splitting never yields zero tokens.
    let total = (len_a + len_b) as f64;
    let score = (100.0 - 100.0 * (result.distance * 2) as f64 / total).floor() as i32;
    SimilarityScore {
        score,
        distance: result.distance,
        differences: result.differences.unwrap_or_default(),
        split_by,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ops::edit_vector;

    #[test]
    fn test_identity() {
        let result = similarity_score("abc", "abc");
        assert_eq!(result.score, 100);
        assert_eq!(result.distance, 0);
        assert_eq!(edit_vector(&result.differences), "øøø");
        assert_eq!(result.split_by, SplitBy::Characters);
    }

    #[test]
    fn test_both_empty() {
        let result = similarity_score("", "");
        assert_eq!(result.score, 100);
        assert_eq!(result.distance, 0);
        assert!(result.differences.is_empty());
    }

    #[test]
    fn test_disjoint() {
        let result = similarity_score("abc", "def");
        assert_eq!(result.score, 0);
        assert_eq!(result.distance, 3);
    }

    #[test]
    fn test_single_substitution() {
        let result = similarity_score("abcd", "abdd");
        assert_eq!(result.score, 75);
        assert_eq!(result.distance, 1);
    }

    #[test]
    fn test_negative_score_unclamped() {
        // distance 3 over 0 + 3 tokens: 100 - 100 * 6/3 = -100.
        let result = similarity_score("", "xyz");
        assert_eq!(result.score, -100);
        assert_eq!(result.distance, 3);
        assert_eq!(edit_vector(&result.differences), "aaa");
    }

    #[test]
    fn test_word_split_over_threshold() {
        let a = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let b = "alpha brava gamma delta epsilon zeta eta theta iota kappa";
        let result = similarity_score(a, b);
        assert_eq!(result.split_by, SplitBy::Words);
        assert_eq!(result.split_by.pattern(), r"(?=\W)");
        // One substituted token out of 10 per side: 100 - 100 * 2/20.
        assert_eq!(result.distance, 1);
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_char_split_under_threshold() {
        let result = similarity_score("short one", "short two");
        assert_eq!(result.split_by, SplitBy::Characters);
        assert_eq!(result.split_by.pattern(), "");
    }

    #[test]
    fn test_custom_limit() {
        let result = similarity_score_with_limit("one two", "one ten", 3);
        assert_eq!(result.split_by, SplitBy::Words);
        // Tokens: ["one", " two"] vs ["one", " ten"] — one substitution.
        assert_eq!(result.distance, 1);
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("hello world"), vec!["hello", " world"]);
        assert_eq!(split_words("a  b"), vec!["a", " ", " b"]);
        assert_eq!(split_words("!ab"), vec!["!ab"]);
        assert_eq!(split_words(""), vec![""]);
        assert_eq!(split_words("foo_bar baz"), vec!["foo_bar", " baz"]);
    }

    #[test]
    fn test_split_words_non_ascii() {
        // Accented letters are boundaries under the ASCII word class.
        assert_eq!(split_words("déjà vu"), vec!["d", "éj", "à", " vu"]);
    }
}
