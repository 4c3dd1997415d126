//! The diff driver: alignment, compaction, and resolution in one call.

use weft_types::{Delta, Edit, EditKind};

use crate::align::align;
use crate::compact::compact;
use crate::resolve::resolve;

/// Diff two sequences, producing the delta that transforms `old` into
/// `new`.
///
/// Elements are compared directly; see [`crate::text::diff_lines`] for
/// comparison through line digests. Never fails: slices are always valid
/// input, and two empty sequences yield an empty script with distance 0.
pub fn diff<T: Clone + PartialEq>(old: &[T], new: &[T]) -> Delta<T> {
    diff_keyed(old, new, old, new)
}

/// Diff `old` against `new` using separate key sequences for equality.
///
/// `old_keys`/`new_keys` must be element-for-element parallel to
/// `old`/`new`; alignment runs over the keys while content is resolved
/// from the real elements. When one side is empty the whole other side
/// becomes a single edit, skipping the matrix; the result is identical
/// to what the general path produces.
pub(crate) fn diff_keyed<T: Clone, K: PartialEq>(
    old: &[T],
    new: &[T],
    old_keys: &[K],
    new_keys: &[K],
) -> Delta<T> {
    debug_assert_eq!(old.len(), old_keys.len());
    debug_assert_eq!(new.len(), new_keys.len());

    if !old.is_empty() && new.is_empty() {
        let edits = vec![Edit {
            kind: EditKind::Remove,
            old_pos: 0,
            old_len: old.len(),
            old_len_other: 0,
            new_pos: 0,
            new_len: 0,
            new_len_other: old.len(),
            old_data: old.to_vec(),
            new_data: Vec::new(),
        }];
        return Delta {
            source: old.to_vec(),
            target: Vec::new(),
            edits,
            distance: old.len(),
            conflict: false,
        };
    }
    if old.is_empty() && !new.is_empty() {
        let edits = vec![Edit {
            kind: EditKind::Add,
            old_pos: 0,
            old_len: 0,
            old_len_other: new.len(),
            new_pos: 0,
            new_len: new.len(),
            new_len_other: 0,
            old_data: Vec::new(),
            new_data: new.to_vec(),
        }];
        return Delta {
            source: Vec::new(),
            target: new.to_vec(),
            edits,
            distance: new.len(),
            conflict: false,
        };
    }

    let (distance, raw) = align(old_keys, new_keys);
    let edits = resolve(&compact(&raw), old, new);

    Delta {
        source: old.to_vec(),
        target: new.to_vec(),
        edits,
        distance,
        conflict: false,
    }
}
