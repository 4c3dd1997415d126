//! Edit compaction: contiguous unit edits of the same kind become runs.

use weft_types::RawEdit;

/// Group contiguous edits of the same kind into single wider edits.
///
/// A group is extended while the next edit has the same kind and starts
/// exactly at the group's current source end; a kind change or a hole
/// closes the group. Unit `Add`s at one insertion point all share the
/// same source position, so they accumulate into one run the same way.
/// Compacting an already-compacted script is a no-op.
pub fn compact(raw: &[RawEdit]) -> Vec<RawEdit> {
    let mut grouped = Vec::new();
    let Some(&first) = raw.first() else {
        return grouped;
    };

    let mut group = RawEdit {
        old_len: 0,
        new_len: 0,
        ..first
    };
    for &e in raw {
        if e.kind == group.kind && e.old_pos == group.old_pos + group.old_len {
            group.old_len += e.old_len;
            group.new_len += e.new_len;
        } else {
            grouped.push(group);
            group = e;
        }
    }
    grouped.push(group);

    grouped
}
