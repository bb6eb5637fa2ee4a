//! Levenshtein edit-distance matrix and edit-script backtrace.
//!
//! The matrix is sized exactly `len_a × len_b` with no zero-th gap
//! row/column: out-of-range neighbor lookups contribute nothing to the
//! min instead of a gap cost. Recorded results depend on this shape, so
//! it must not be "corrected" to the textbook `(m+1) × (n+1)` form —
//! on prefix alignments the two disagree (e.g. "k"/"kak" scores 1 here,
//! 2 in the textbook form).

use super::ops::EditOp;

/// Result of a [`levenshtein`] computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevenshteinResult {
    /// Minimum number of insert/delete/substitute operations.
    pub distance: usize,
    /// Edit script aligned to the backtrace path; `None` when skipped.
    pub differences: Option<Vec<EditOp>>,
}

/// Candidate predecessor offsets examined by the backtrace, in fixed
/// order. Ties resolve first-seen-wins, so the order is load-bearing.
const BACKTRACE_CANDIDATES: &[((isize, isize), EditOp)] = &[
    ((0, -1), EditOp::Deletion),
    ((-1, 0), EditOp::Addition),
    ((-1, -1), EditOp::Substitution),
];

/// Compute the edit distance between two token sequences and,
/// unless `skip_differences` is set, the edit script that achieves it.
///
/// Tokens are compared by value equality. Empty inputs short-circuit
/// without building a matrix: an empty `tokens_a` yields all-[`EditOp::Addition`],
/// an empty `tokens_b` all-[`EditOp::Deletion`].
pub fn levenshtein<T: PartialEq>(
    tokens_a: &[T],
    tokens_b: &[T],
    skip_differences: bool,
) -> LevenshteinResult {
    let len_a = tokens_a.len();
    let len_b = tokens_b.len();

    if len_a == 0 && len_b == 0 {
        return LevenshteinResult {
            distance: 0,
            differences: (!skip_differences).then(Vec::new),
        };
    }
    if len_a == 0 {
        return LevenshteinResult {
            distance: len_b,
            differences: (!skip_differences).then(|| vec![EditOp::Addition; len_b]),
        };
    }
    if len_b == 0 {
        return LevenshteinResult {
            distance: len_a,
            differences: (!skip_differences).then(|| vec![EditOp::Deletion; len_a]),
        };
    }

    let mut matrix = vec![vec![0usize; len_b]; len_a];
    for i in 0..len_a {
        for j in 0..len_b {
            let diff = usize::from(tokens_a[i] != tokens_b[j]);
            let above = i.checked_sub(1).map(|p| matrix[p][j]);
            let left = j.checked_sub(1).map(|p| matrix[i][p]);
            let diagonal = i
                .checked_sub(1)
                .and_then(|p| j.checked_sub(1).map(|q| matrix[p][q]));
            // Out-of-range neighbors are absent; only at (0,0) are all
            // three absent, where the past cost is 0.
            let past = [above, left, diagonal]
                .into_iter()
                .flatten()
                .min()
                .unwrap_or(0);
            matrix[i][j] = diff + past;
        }
    }

    let distance = matrix[len_a - 1][len_b - 1];
    let differences = (!skip_differences)
        .then(|| backtrace(&matrix, (len_a as isize - 1, len_b as isize - 1)));

    LevenshteinResult {
        distance,
        differences,
    }
}

/// Compute only the edit distance, skipping the backtrace.
pub fn distance<T: PartialEq>(tokens_a: &[T], tokens_b: &[T]) -> usize {
    levenshtein(tokens_a, tokens_b, true).distance
}

/// Walk the distance matrix from `start` back to the boundary,
/// emitting one [`EditOp`] per step.
///
/// Each step considers the in-bounds predecessors in
/// [`BACKTRACE_CANDIDATES`] order and keeps the first minimum seen;
/// a later candidate wins only when strictly smaller. With no candidate
/// strictly better than the defaults, the walk moves diagonally with a
/// [`EditOp::NoChange`] tag for a zero-valued cell and
/// [`EditOp::Substitution`] otherwise. A minimum equal to both the
/// current cell and its diagonal neighbor is a cost-free step and
/// forces [`EditOp::NoChange`] along the diagonal.
///
/// The walk runs until both coordinates are negative; the accumulated
/// tags are reversed so the script reads source-to-target.
pub fn backtrace(matrix: &[Vec<usize>], start: (isize, isize)) -> Vec<EditOp> {
    let mut ops = Vec::new();
    let (mut i, mut j) = start;

    while i > -1 || j > -1 {
        let current = cell(matrix, i, j);

        let mut tag = if current == Some(0) {
            EditOp::NoChange
        } else {
            EditOp::Substitution
        };
        let mut step = (-1, -1);
        let mut best: Option<usize> = None;

        for &((di, dj), candidate_tag) in BACKTRACE_CANDIDATES {
            let Some(value) = cell(matrix, i + di, j + dj) else {
                continue;
            };
            if best.is_none_or(|b| value < b) {
                best = Some(value);
                tag = candidate_tag;
                step = (di, dj);
            }
        }

        if best.is_some() && best == current && best == cell(matrix, i - 1, j - 1) {
            tag = EditOp::NoChange;
            step = (-1, -1);
        }

        ops.push(tag);
        i += step.0;
        j += step.1;
    }

    ops.reverse();
    ops
}

/// Matrix lookup returning `None` for any out-of-range coordinate.
fn cell(matrix: &[Vec<usize>], i: isize, j: isize) -> Option<usize> {
    let i = usize::try_from(i).ok()?;
    let j = usize::try_from(j).ok()?;
    matrix.get(i)?.get(j).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ops::{apply, edit_vector};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical() {
        let result = levenshtein(&chars("abcde"), &chars("abcde"), false);
        assert_eq!(result.distance, 0);
        assert_eq!(edit_vector(&result.differences.expect("differences")), "øøøøø");
    }

    #[test]
    fn test_empty() {
        let empty: Vec<char> = Vec::new();

        let result = levenshtein(&empty, &empty, false);
        assert_eq!(result.distance, 0);
        assert_eq!(result.differences, Some(Vec::new()));

        let result = levenshtein(&empty, &chars("abc"), false);
        assert_eq!(result.distance, 3);
        assert_eq!(edit_vector(&result.differences.expect("differences")), "aaa");

        let result = levenshtein(&chars("abc"), &empty, false);
        assert_eq!(result.distance, 3);
        assert_eq!(edit_vector(&result.differences.expect("differences")), "ddd");
    }

    #[test]
    fn test_single_edit() {
        assert_eq!(distance(&chars("capes"), &chars("caps")), 1);
        assert_eq!(distance(&chars("cat"), &chars("cats")), 1);
        assert_eq!(distance(&chars("cats"), &chars("cat")), 1);
    }

    #[test]
    fn test_disjoint() {
        let result = levenshtein(&chars("abc"), &chars("def"), false);
        assert_eq!(result.distance, 3);
        assert_eq!(edit_vector(&result.differences.expect("differences")), "sss");
    }

    #[test]
    fn test_classic() {
        assert_eq!(distance(&chars("kitten"), &chars("sitting")), 3);
    }

    #[test]
    fn test_no_gap_row_shape() {
        // Prefix alignments score lower than the textbook form because
        // there is no zero-th gap row/column.
        assert_eq!(distance(&chars("k"), &chars("kak")), 1);
    }

    #[test]
    fn test_onion_script() {
        let result = levenshtein(&chars("onion"), &chars("onus"), false);
        assert_eq!(result.distance, 3);
        assert_eq!(edit_vector(&result.differences.expect("differences")), "øøssa");
    }

    #[test]
    fn test_skip_differences() {
        let result = levenshtein(&chars("onion"), &chars("onus"), true);
        assert_eq!(result.distance, 3);
        assert_eq!(result.differences, None);
    }

    #[test]
    fn test_symmetry() {
        for (a, b) in [("capes", "caps"), ("onion", "onus"), ("kitten", "sitting")] {
            assert_eq!(
                distance(&chars(a), &chars(b)),
                distance(&chars(b), &chars(a)),
                "distance not symmetric for {a:?}/{b:?}"
            );
        }
    }

    #[test]
    fn test_distance_bound() {
        for (a, b) in [("abc", "def"), ("", "xyz"), ("hello", "world"), ("a", "bcdef")] {
            let d = distance(&chars(a), &chars(b));
            assert!(
                d <= a.len() + b.len(),
                "distance {d} exceeds bound for {a:?}/{b:?}"
            );
        }
    }

    #[test]
    fn test_script_reconstructs_target() {
        for (a, b) in [
            ("onion", "onus"),
            ("capes", "caps"),
            ("abc", "def"),
            ("kitten", "sitting"),
            ("sunday", "saturday"),
        ] {
            let (ta, tb) = (chars(a), chars(b));
            let result = levenshtein(&ta, &tb, false);
            let script = result.differences.expect("differences");
            assert_eq!(
                apply(&script, &ta, &tb),
                Some(tb.clone()),
                "script {:?} does not rebuild {b:?} from {a:?}",
                edit_vector(&script)
            );
        }
    }

    #[test]
    fn test_word_tokens() {
        let a = ["alpha", "beta", "gamma"];
        let b = ["alpha", "brava", "gamma"];
        let result = levenshtein(&a, &b, false);
        assert_eq!(result.distance, 1);
        assert_eq!(edit_vector(&result.differences.expect("differences")), "øsø");
    }
}
