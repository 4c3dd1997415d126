//! Character-mode and line-mode front ends.
//!
//! Character mode diffs a string as a `char` sequence. Line mode reduces
//! each line to a 32-bit digest (see `weft-digest`) and aligns the
//! digest sequences, so a thousand-line file costs a thousand-element
//! matrix row, not a hundred-thousand-character one; the resolved edits
//! still carry the real lines.

use weft_digest::LineDigester;
use weft_types::Delta;

use crate::apply::apply;
use crate::engine::{diff, diff_keyed};

/// Sentinel rendered for a conflicted delta by the text front ends.
pub const CONFLICT_MARKER: &str = "<conflict>";

/// Diff two strings character by character.
pub fn diff_chars(old: &str, new: &str) -> Delta<char> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    diff(&old, &new)
}

/// Diff two line lists through their digests.
///
/// Lines whose digests collide are treated as equal; see the
/// `weft-digest` crate docs for why that approximation is accepted.
pub fn diff_lines(old: &[String], new: &[String], digester: &LineDigester) -> Delta<String> {
    let old_keys = digester.digest_lines(old);
    let new_keys = digester.digest_lines(new);
    diff_keyed(old, new, &old_keys, &new_keys)
}

/// Materialize a character delta's target as a `String`, or the
/// [`CONFLICT_MARKER`] if the delta is conflicted.
pub fn apply_chars(delta: &Delta<char>) -> String {
    match apply(delta) {
        Some(chars) => chars.into_iter().collect(),
        None => CONFLICT_MARKER.to_string(),
    }
}

/// Materialize a line delta's target, or a single [`CONFLICT_MARKER`]
/// line if the delta is conflicted.
pub fn apply_lines(delta: &Delta<String>) -> Vec<String> {
    match apply(delta) {
        Some(lines) => lines,
        None => vec![CONFLICT_MARKER.to_string()],
    }
}
