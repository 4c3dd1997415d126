use serde::{Deserialize, Serialize};

use crate::edit::{Edit, EditKind};

/// The result of diffing two sequences, or of merging two deltas that
/// share an ancestor.
///
/// A delta is directional: `edits` are the modifications to apply to
/// `source` in order to obtain `target`. It is created once and never
/// mutated afterwards.
///
/// # Invariants
///
/// - For a non-conflicting delta, replaying `edits` against `source`
///   reproduces `target` exactly.
/// - `edits` are strictly ascending in `old_pos` and non-overlapping in
///   source coordinates (adjacent edits may touch).
/// - `distance == 0` iff `edits` is empty iff `source == target`.
/// - A delta produced by merge carries the common ancestor as `source`.
/// - A conflicted delta has empty `edits` and `target`; its materialized
///   form is the conflict sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta<T> {
    /// The original sequence.
    pub source: Vec<T>,
    /// The modified sequence.
    pub target: Vec<T>,
    /// The modifications transforming `source` into `target`.
    pub edits: Vec<Edit<T>>,
    /// Total edit cost (Levenshtein distance).
    pub distance: usize,
    /// Set only by the merger, when two scripts modify overlapping
    /// source ranges with different effects.
    pub conflict: bool,
}

impl<T> Delta<T> {
    /// A conflicted delta over `ancestor`: no usable edit script, no
    /// target. Produced by the merger when reconciliation fails.
    pub fn conflicted(ancestor: Vec<T>) -> Self {
        Self {
            source: ancestor,
            target: Vec::new(),
            edits: Vec::new(),
            distance: 0,
            conflict: true,
        }
    }

    /// Returns `true` if the two sequences are identical.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Total number of elements inserted across all edits.
    pub fn additions(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| e.kind == EditKind::Add)
            .map(|e| e.new_len)
            .sum()
    }

    /// Total number of elements removed across all edits.
    pub fn removals(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| e.kind == EditKind::Remove)
            .map(|e| e.old_len)
            .sum()
    }

    /// Total number of elements substituted across all edits.
    pub fn replacements(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| e.kind == EditKind::Replace)
            .map(|e| e.old_len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicted_delta_keeps_the_ancestor() {
        let d: Delta<char> = Delta::conflicted(vec!['a', 'b']);
        assert!(d.conflict);
        assert_eq!(d.source, vec!['a', 'b']);
        assert!(d.target.is_empty());
        assert!(d.edits.is_empty());
    }

    #[test]
    fn counters_split_by_kind() {
        let d = Delta {
            source: vec!['a', 'b', 'c'],
            target: vec!['x', 'b'],
            edits: vec![
                Edit {
                    kind: EditKind::Replace,
                    old_pos: 0,
                    old_len: 1,
                    old_len_other: 0,
                    new_pos: 0,
                    new_len: 1,
                    new_len_other: 0,
                    old_data: vec!['a'],
                    new_data: vec!['x'],
                },
                Edit {
                    kind: EditKind::Remove,
                    old_pos: 2,
                    old_len: 1,
                    old_len_other: 0,
                    new_pos: 2,
                    new_len: 0,
                    new_len_other: 1,
                    old_data: vec!['c'],
                    new_data: vec![],
                },
            ],
            distance: 2,
            conflict: false,
        };
        assert_eq!(d.additions(), 0);
        assert_eq!(d.removals(), 1);
        assert_eq!(d.replacements(), 1);
        assert!(!d.is_empty());
    }
}
