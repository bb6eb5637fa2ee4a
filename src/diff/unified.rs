//! Unified diff rendering using the `similar` crate.
//!
//! Human-readable companion to the symbolic edit script: where the
//! engine reports tag sequences, this renders line-level hunks.

use similar::{Algorithm, TextDiff};

/// Render a unified diff between two texts under the given label.
///
/// Uses the Patience diff algorithm, which produces cleaner hunks for
/// structured text by anchoring on unique lines.
pub fn unified_diff(label: &str, old: &str, new: &str) -> String {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Patience)
        .diff_lines(old, new);

    diff.unified_diff()
        .context_radius(3)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts() {
        let result = unified_diff("text", "same\n", "same\n");
        assert!(!result.contains("+same"));
        assert!(!result.contains("-same"));
    }

    #[test]
    fn test_changed_line() {
        let old = "one\ntwo\nthree\n";
        let new = "one\n2\nthree\n";
        let result = unified_diff("text", old, new);
        assert!(result.contains("a/text"));
        assert!(result.contains("b/text"));
        assert!(result.contains("-two"));
        assert!(result.contains("+2"));
    }

    #[test]
    fn test_added_line() {
        let result = unified_diff("text", "one\n", "one\ntwo\n");
        assert!(result.contains("+two"));
        assert!(!result.contains("-one"));
    }
}
