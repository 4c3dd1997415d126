//! Script replay: materialize a delta's target from its source.

use weft_types::{Delta, Edit, EditKind};

/// Replay an edit script against its source sequence.
///
/// Walks the script in order, copying unedited spans verbatim: an `Add`
/// inserts its content without consuming source elements, a `Remove`
/// skips its source span, a `Replace` does both. The unedited tail is
/// copied after the last edit.
pub fn replay<T: Clone>(edits: &[Edit<T>], old: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(old.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.old_pos > cursor {
            out.extend_from_slice(&old[cursor..edit.old_pos]);
        }
        cursor = edit.old_pos;
        match edit.kind {
            EditKind::Add => out.extend_from_slice(&edit.new_data),
            EditKind::Remove => cursor += edit.old_len,
            EditKind::Replace => {
                out.extend_from_slice(&edit.new_data);
                cursor += edit.old_len;
            }
        }
    }
    out.extend_from_slice(&old[cursor..]);
    out
}

/// Materialize a delta's target, or `None` for a conflicted delta.
///
/// `None` is the core's conflict sentinel; the text front ends in
/// [`crate::text`] render it as the literal `"<conflict>"` marker.
pub fn apply<T: Clone>(delta: &Delta<T>) -> Option<Vec<T>> {
    if delta.conflict {
        return None;
    }
    Some(replay(&delta.edits, &delta.source))
}
