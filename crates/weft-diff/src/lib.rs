//! Diff engine for Weft.
//!
//! Computes minimal edit scripts between two sequences and replays them.
//! The pipeline is: alignment (dynamic-programming edit distance with a
//! deterministic backtrace) -> compaction (unit edits grouped into runs)
//! -> resolution (content and cross-side widths attached) -> a
//! [`Delta`](weft_types::Delta) value. Replay materializes a delta's
//! target from its source, and validates the script in the process.
//!
//! # Key Functions
//!
//! - [`diff`] -- generic sequence diff over any `T: Clone + PartialEq`
//! - [`diff_chars`] / [`diff_lines`] -- character-mode and line-mode
//!   front ends (line mode compares 32-bit line digests)
//! - [`apply`] / [`replay`] -- materialize a delta's target
//! - [`apply_chars`] / [`apply_lines`] -- text front ends, yielding the
//!   `"<conflict>"` sentinel for conflicted deltas
//!
//! Everything here is pure, synchronous computation; the alignment
//! matrix is O(|old| * |new|) in time and space, so callers with very
//! large inputs should diff per line rather than per character.

pub mod align;
pub mod apply;
pub mod compact;
pub mod engine;
pub mod resolve;
pub mod text;

pub use align::align;
pub use apply::{apply, replay};
pub use compact::compact;
pub use engine::diff;
pub use resolve::resolve;
pub use text::{apply_chars, apply_lines, diff_chars, diff_lines, CONFLICT_MARKER};
