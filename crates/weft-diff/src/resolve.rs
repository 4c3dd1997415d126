//! Content resolution: attach removed/inserted elements to edit geometry.

use weft_types::{Edit, EditKind, RawEdit};

/// Turn compacted edit geometry into full edits over the given
/// sequences.
///
/// Removing kinds slice their span out of `old` into `old_data`; adding
/// kinds slice theirs out of `new` into `new_data`. The cross-side
/// widths consumed by the merger are filled here: an `Add`'s target
/// footprint is mirrored into source coordinates, a `Remove`'s source
/// footprint into target coordinates. `Replace` needs neither, both its
/// spans being equal-width.
///
/// In line mode the geometry is computed over digests while `old` and
/// `new` are the actual lines; the two only have to agree on length.
pub fn resolve<T: Clone>(raw: &[RawEdit], old: &[T], new: &[T]) -> Vec<Edit<T>> {
    raw.iter()
        .map(|r| {
            let mut edit = Edit {
                kind: r.kind,
                old_pos: r.old_pos,
                old_len: r.old_len,
                old_len_other: 0,
                new_pos: r.new_pos,
                new_len: r.new_len,
                new_len_other: 0,
                old_data: Vec::new(),
                new_data: Vec::new(),
            };
            if r.kind.removes() {
                edit.old_data = old[r.old_pos..r.old_pos + r.old_len].to_vec();
            }
            if r.kind.adds() {
                edit.new_data = new[r.new_pos..r.new_pos + r.new_len].to_vec();
            }
            match r.kind {
                EditKind::Add => edit.old_len_other = r.new_len,
                EditKind::Remove => edit.new_len_other = r.old_len,
                EditKind::Replace => {}
            }
            edit
        })
        .collect()
}
