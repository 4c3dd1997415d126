use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The kind of a contiguous homogeneous change.
///
/// `Replace` stands for a removal and an insertion at the same position.
/// The three variants make the edit kind exhaustive: there is no way to
/// construct an edit that neither adds nor removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditKind {
    /// Elements are inserted into the target; the source is untouched.
    Add,
    /// Elements are removed from the source; nothing is inserted.
    Remove,
    /// A source span is removed and a target span of equal length is
    /// inserted in its place.
    Replace,
}

impl EditKind {
    /// Returns `true` if this kind removes elements from the source.
    pub fn removes(self) -> bool {
        matches!(self, EditKind::Remove | EditKind::Replace)
    }

    /// Returns `true` if this kind inserts elements into the target.
    pub fn adds(self) -> bool {
        matches!(self, EditKind::Add | EditKind::Replace)
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditKind::Add => write!(f, "add"),
            EditKind::Remove => write!(f, "remove"),
            EditKind::Replace => write!(f, "replace"),
        }
    }
}

/// Edit geometry: a change's position and width on both sides, without
/// the affected content.
///
/// The alignment engine emits unit-width `RawEdit`s; the compactor merges
/// contiguous runs of them; the resolver turns them into [`Edit`]s by
/// attaching content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEdit {
    pub kind: EditKind,
    /// Position of the affected span in the source sequence.
    pub old_pos: usize,
    /// Length of the affected span in the source sequence (0 for `Add`).
    pub old_len: usize,
    /// Position of the corresponding span in the target sequence.
    pub new_pos: usize,
    /// Length of the corresponding span in the target sequence (0 for
    /// `Remove`).
    pub new_len: usize,
}

impl RawEdit {
    /// One past the last affected source index.
    pub fn old_end(&self) -> usize {
        self.old_pos + self.old_len
    }
}

/// One contiguous homogeneous change, with its content resolved.
///
/// `old_len_other` / `new_len_other` mirror the width of the opposite
/// side's span into this side's coordinates: an `Add` occupies no source
/// elements, but its target footprint (`old_len_other == new_len`) is
/// what the merger measures overlaps and shifts against. Only the merge
/// engine reads these fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit<T> {
    pub kind: EditKind,
    /// Position of the affected span in the source sequence.
    pub old_pos: usize,
    /// Length of the affected span in the source sequence.
    pub old_len: usize,
    /// Width of the target-side span mirrored into source coordinates.
    /// Non-zero only for `Add`.
    pub old_len_other: usize,
    /// Position of the corresponding span in the target sequence.
    pub new_pos: usize,
    /// Length of the corresponding span in the target sequence.
    pub new_len: usize,
    /// Width of the source-side span mirrored into target coordinates.
    /// Non-zero only for `Remove`.
    pub new_len_other: usize,
    /// The removed source elements (empty for `Add`).
    pub old_data: Vec<T>,
    /// The inserted target elements (empty for `Remove`).
    pub new_data: Vec<T>,
}

impl<T> Edit<T> {
    /// One past the last affected source index.
    pub fn old_end(&self) -> usize {
        self.old_pos + self.old_len
    }

    /// The source range this edit claims during merge winner selection.
    ///
    /// Includes the mirrored opposite-side width, so an `Add` claims its
    /// target footprint in source coordinates. For resolved edits the
    /// range is never empty.
    pub fn merge_span(&self) -> Range<usize> {
        self.old_pos..self.old_pos + self.old_len + self.old_len_other
    }

    /// Returns `true` if this edit's merge span intersects `other`'s.
    pub fn overlaps<U>(&self, other: &Edit<U>) -> bool {
        let a = self.merge_span();
        let b = other.merge_span();
        a.start < b.end && b.start < a.end
    }

    /// Net length change this edit contributes to the merged target:
    /// positive for `Add`, negative for `Remove`, zero for `Replace`
    /// (replaces produced by compaction are always equal-width).
    pub fn net_shift(&self) -> isize {
        let span = (self.old_len + self.old_len_other) as isize;
        match self.kind {
            EditKind::Add => span,
            EditKind::Remove => -span,
            EditKind::Replace => 0,
        }
    }

    /// The Levenshtein cost of this edit: one unit per inserted, removed,
    /// or substituted element.
    pub fn cost(&self) -> usize {
        match self.kind {
            EditKind::Add => self.new_len,
            EditKind::Remove | EditKind::Replace => self.old_len,
        }
    }
}
