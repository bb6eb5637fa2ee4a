//! Edit-operation tags and edit-script helpers.
//!
//! An edit script is an ordered sequence of [`EditOp`] tags, one per step
//! of the backtrace path through the distance matrix. Scripts render to
//! compact tag strings (e.g. `"øøssa"`) for logging and tool payloads.

/// A single step in an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Tokens are equal; no cost incurred at this step.
    NoChange,
    /// A token present on only one side of the alignment.
    Addition,
    /// A token absent from the other side of the alignment.
    Deletion,
    /// A token replaced by a different token.
    Substitution,
}

impl EditOp {
    /// Single-character rendering used in edit vectors.
    pub const fn as_char(self) -> char {
        match self {
            Self::NoChange => 'ø',
            Self::Addition => 'a',
            Self::Deletion => 'd',
            Self::Substitution => 's',
        }
    }

    /// Parse from the single-character rendering.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'ø' => Some(Self::NoChange),
            'a' => Some(Self::Addition),
            'd' => Some(Self::Deletion),
            's' => Some(Self::Substitution),
            _ => None,
        }
    }
}

/// Render an edit script as a tag string (e.g. `"øøssa"`).
pub fn edit_vector(ops: &[EditOp]) -> String {
    ops.iter().map(|op| op.as_char()).collect()
}

/// Replay an edit script produced for two non-empty token sequences,
/// reconstructing `b` from `a`.
///
/// Tags carry the backtrace's orientation: [`EditOp::Deletion`] consumes a
/// token of `b` only, [`EditOp::Addition`] consumes a token of `a` only,
/// and the other two consume one token of each. Returns `None` when the
/// script runs past either sequence, leaves tokens unconsumed, or marks
/// unequal tokens as unchanged.
///
/// Scripts from the empty-sequence base cases use the conventional
/// labels instead and do not replay through this function.
pub fn apply<T: PartialEq + Clone>(script: &[EditOp], a: &[T], b: &[T]) -> Option<Vec<T>> {
    let mut out = Vec::with_capacity(b.len());
    let mut ia = 0usize;
    let mut ib = 0usize;

    for &op in script {
        match op {
            EditOp::NoChange => {
                let (ta, tb) = (a.get(ia)?, b.get(ib)?);
                if ta != tb {
                    return None;
                }
                out.push(ta.clone());
                ia += 1;
                ib += 1;
            }
            EditOp::Substitution => {
                a.get(ia)?;
                out.push(b.get(ib)?.clone());
                ia += 1;
                ib += 1;
            }
            EditOp::Deletion => {
                out.push(b.get(ib)?.clone());
                ib += 1;
            }
            EditOp::Addition => {
                a.get(ia)?;
                ia += 1;
            }
        }
    }

    (ia == a.len() && ib == b.len()).then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for op in [
            EditOp::NoChange,
            EditOp::Addition,
            EditOp::Deletion,
            EditOp::Substitution,
        ] {
            assert_eq!(EditOp::from_char(op.as_char()), Some(op));
        }
        assert_eq!(EditOp::from_char('x'), None);
    }

    #[test]
    fn test_edit_vector() {
        let script = [
            EditOp::NoChange,
            EditOp::NoChange,
            EditOp::Substitution,
            EditOp::Substitution,
            EditOp::Addition,
        ];
        assert_eq!(edit_vector(&script), "øøssa");
    }

    #[test]
    fn test_apply_reconstructs_target() {
        let a: Vec<char> = "capes".chars().collect();
        let b: Vec<char> = "caps".chars().collect();
        let script = [
            EditOp::NoChange,
            EditOp::NoChange,
            EditOp::NoChange,
            EditOp::Addition,
            EditOp::NoChange,
        ];
        assert_eq!(apply(&script, &a, &b), Some(b.clone()));
    }

    #[test]
    fn test_apply_rejects_unequal_no_change() {
        assert_eq!(apply(&[EditOp::NoChange], &['a'], &['b']), None);
    }

    #[test]
    fn test_apply_rejects_misaligned_script() {
        // Script too short: one token of each side left unconsumed.
        let a = ['a', 'b'];
        let b = ['a', 'b'];
        assert_eq!(apply(&[EditOp::NoChange], &a, &b), None);
        // Script too long: runs past both sequences.
        assert_eq!(
            apply(&[EditOp::NoChange, EditOp::NoChange], &['a'], &['a']),
            None
        );
    }
}
