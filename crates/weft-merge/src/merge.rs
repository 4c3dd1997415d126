//! The three-way merge loop.

use std::cmp::Ordering;

use tracing::debug;

use weft_diff::replay;
use weft_types::{Delta, Edit};

use crate::error::{MergeError, MergeResult};

/// Reconcile two deltas computed against the same ancestor into one.
///
/// Walks both edit scripts with independent cursors, repeatedly choosing
/// the edit with the smaller source position as the winner. Each time a
/// winner is consumed, the target positions of the losing side's
/// remaining edits are shifted by the winner's net length change: those
/// edits were computed relative to the ancestor, and the merged target
/// has already grown or shrunk ahead of them. Edits whose merge spans
/// overlap either coincide exactly (consumed as one shared edit) or
/// conflict, in which case the result is a conflicted delta with no
/// usable script.
///
/// The merge operates on private clones of both scripts; the callers'
/// deltas are never mutated. The returned delta always carries the
/// common ancestor as its source.
///
/// # Errors
///
/// [`MergeError::AncestorMismatch`] if the two deltas' sources differ.
///
/// # Panics
///
/// Panics if the scripts violate the engine's ordering invariants, e.g.
/// two non-overlapping edits sharing a source position. Scripts produced
/// by `weft-diff` never do.
pub fn merge<T: Clone + PartialEq>(d1: &Delta<T>, d2: &Delta<T>) -> MergeResult<Delta<T>> {
    if d1.source != d2.source {
        return Err(MergeError::AncestorMismatch);
    }

    let mut side1 = d1.edits.clone();
    let mut side2 = d2.edits.clone();
    let mut merged: Vec<Edit<T>> = Vec::new();
    let mut i1 = 0;
    let mut i2 = 0;

    loop {
        let first_wins = match (side1.get(i1), side2.get(i2)) {
            (None, None) => break,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(e1), Some(e2)) => {
                if e1.overlaps(e2) {
                    if e1 == e2 {
                        // Both sides made the same edit: emit one copy.
                        merged.push(e1.clone());
                        i1 += 1;
                        i2 += 1;
                        continue;
                    }
                    debug!(
                        pos1 = e1.old_pos,
                        pos2 = e2.old_pos,
                        "overlapping edits diverge, flagging conflict"
                    );
                    return Ok(Delta::conflicted(d1.source.clone()));
                }
                match e1.old_pos.cmp(&e2.old_pos) {
                    Ordering::Less => true,
                    Ordering::Greater => false,
                    Ordering::Equal => {
                        unreachable!("non-overlapping edits with equal source position")
                    }
                }
            }
        };

        let winner = if first_wins {
            let e = side1[i1].clone();
            i1 += 1;
            realign(&mut side2[i2..], e.net_shift());
            e
        } else {
            let e = side2[i2].clone();
            i2 += 1;
            realign(&mut side1[i1..], e.net_shift());
            e
        };
        debug!(kind = %winner.kind, old_pos = winner.old_pos, "merge winner chosen");
        merged.push(winner);
    }

    let target = replay(&merged, &d1.source);
    let distance = merged.iter().map(Edit::cost).sum();
    Ok(Delta {
        source: d1.source.clone(),
        target,
        edits: merged,
        distance,
        conflict: false,
    })
}

/// Shift the target positions of the losing side's unconsumed edits by
/// the winner's net length change.
fn realign<T>(pending: &mut [Edit<T>], shift: isize) {
    if shift == 0 {
        return;
    }
    for edit in pending {
        let new_pos = edit.new_pos as isize + shift;
        assert!(
            new_pos >= 0,
            "merge alignment produced a negative target position"
        );
        edit.new_pos = new_pos as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_diff::{apply_chars, apply_lines, diff_chars, diff_lines};
    use weft_digest::LineDigester;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn diff_line_lists(old: &[String], new: &[String]) -> Delta<String> {
        diff_lines(old, new, &LineDigester::new())
    }

    #[test]
    fn mismatched_ancestors_are_rejected() {
        let d1 = diff_chars("one", "two");
        let d2 = diff_chars("other", "two");
        assert_eq!(merge(&d1, &d2), Err(MergeError::AncestorMismatch));
    }

    #[test]
    fn self_merge_reproduces_the_diff() {
        let d = diff_chars("kitten", "sitting");
        let m = merge(&d, &d).unwrap();
        assert!(!m.conflict);
        assert_eq!(m, d);
    }

    #[test]
    fn merge_with_an_empty_side_keeps_the_other() {
        let base = "shared text";
        let idle = diff_chars(base, base);
        let busy = diff_chars(base, "shared changed text");
        let m = merge(&idle, &busy).unwrap();
        assert!(!m.conflict);
        assert_eq!(apply_chars(&m), "shared changed text");
    }

    #[test]
    fn disjoint_line_inserts_both_survive() {
        let ancestor = lines(&["a", "b", "c", "d", "e"]);
        let d1 = diff_line_lists(&ancestor, &lines(&["a", "X", "b", "c", "d", "e"]));
        let d2 = diff_line_lists(&ancestor, &lines(&["a", "b", "c", "Y", "d", "e"]));

        let m = merge(&d1, &d2).unwrap();
        assert!(!m.conflict);
        assert_eq!(m.source, ancestor);
        assert_eq!(apply_lines(&m), lines(&["a", "X", "b", "c", "Y", "d", "e"]));
        // The later insert's target position accounts for the earlier one.
        assert_eq!(m.edits[1].new_pos, 4);
    }

    #[test]
    fn disjoint_merge_is_order_independent() {
        let ancestor = lines(&["a", "b", "c", "d", "e"]);
        let d1 = diff_line_lists(&ancestor, &lines(&["a", "X", "b", "c", "d", "e"]));
        let d2 = diff_line_lists(&ancestor, &lines(&["a", "b", "c", "Y", "d", "e"]));

        let forward = merge(&d1, &d2).unwrap();
        let backward = merge(&d2, &d1).unwrap();
        assert_eq!(forward.target, backward.target);
    }

    #[test]
    fn overlapping_line_edits_conflict() {
        let ancestor = lines(&["hello world"]);
        let d1 = diff_line_lists(&ancestor, &lines(&["hello there"]));
        let d2 = diff_line_lists(&ancestor, &lines(&["hi world"]));

        let m = merge(&d1, &d2).unwrap();
        assert!(m.conflict);
        assert_eq!(m.source, ancestor);
        assert!(m.edits.is_empty());
        assert_eq!(apply_lines(&m), lines(&["<conflict>"]));
    }

    #[test]
    fn char_edits_to_different_words_merge_cleanly() {
        // The same three strings as the line-mode conflict, but diffed by
        // character: the edits touch disjoint ranges and compose.
        let d1 = diff_chars("hello world", "hello there");
        let d2 = diff_chars("hello world", "hi world");

        let m = merge(&d1, &d2).unwrap();
        assert!(!m.conflict);
        assert_eq!(apply_chars(&m), "hi there");
    }

    #[test]
    fn overlapping_char_edits_conflict() {
        let d1 = diff_chars("abcdef", "aXcdef");
        let d2 = diff_chars("abcdef", "aYcdef");

        let m = merge(&d1, &d2).unwrap();
        assert!(m.conflict);
        assert_eq!(apply_chars(&m), "<conflict>");
    }

    #[test]
    fn conflict_leaves_the_inputs_untouched() {
        let d1 = diff_chars("abcdef", "aXcdef");
        let d2 = diff_chars("abcdef", "aYcdef");
        let d1_before = d1.clone();
        let d2_before = d2.clone();

        let _ = merge(&d1, &d2).unwrap();
        assert_eq!(d1, d1_before);
        assert_eq!(d2, d2_before);
    }

    #[test]
    fn identical_edits_on_both_sides_emit_once() {
        let ancestor = lines(&["a", "b", "c"]);
        let edited = lines(&["a", "b2", "c"]);
        let d1 = diff_line_lists(&ancestor, &edited);
        let d2 = diff_line_lists(&ancestor, &edited);

        let m = merge(&d1, &d2).unwrap();
        assert!(!m.conflict);
        assert_eq!(m.edits.len(), 1);
        assert_eq!(apply_lines(&m), edited);
    }

    #[test]
    fn remove_before_insert_shifts_the_insert_left() {
        let ancestor: Vec<char> = "abcdef".chars().collect();
        let d1 = diff_chars("abcdef", "cdef"); // removes "ab"
        let d2 = diff_chars("abcdef", "abcdefXY"); // appends "XY"

        let m = merge(&d1, &d2).unwrap();
        assert!(!m.conflict);
        assert_eq!(m.source, ancestor);
        assert_eq!(apply_chars(&m), "cdefXY");
        // The append lands two positions earlier in the merged target.
        assert_eq!(m.edits[1].new_pos, 4);
    }

    #[test]
    fn merged_distance_sums_both_sides() {
        let ancestor = lines(&["a", "b", "c", "d", "e"]);
        let d1 = diff_line_lists(&ancestor, &lines(&["a", "X", "b", "c", "d", "e"]));
        let d2 = diff_line_lists(&ancestor, &lines(&["a", "b", "c", "d"]));

        let m = merge(&d1, &d2).unwrap();
        assert!(!m.conflict);
        assert_eq!(m.distance, d1.distance + d2.distance);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn self_merge_never_conflicts(
                a in "[a-c]{0,16}",
                b in "[a-c]{0,16}",
            ) {
                let d = diff_chars(&a, &b);
                let m = merge(&d, &d).unwrap();
                prop_assert!(!m.conflict);
                prop_assert_eq!(m, d);
            }

            #[test]
            fn merge_round_trips_or_conflicts(
                base in "[a-c]{1,12}",
                left in "[a-c]{0,12}",
                right in "[a-c]{0,12}",
            ) {
                let d1 = diff_chars(&base, &left);
                let d2 = diff_chars(&base, &right);
                let m = merge(&d1, &d2).unwrap();
                if !m.conflict {
                    // A clean merge must replay against the ancestor.
                    let base_chars: Vec<char> = base.chars().collect();
                    prop_assert_eq!(&m.source, &base_chars);
                    prop_assert_eq!(replay(&m.edits, &m.source), m.target.clone());
                }
            }
        }
    }
}
