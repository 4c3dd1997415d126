//! Merge engine for Weft.
//!
//! Implements optimistic three-way merge: two edit scripts computed
//! against the same ancestor sequence are reconciled into one merged
//! script, re-aligning target positions as each edit is chosen and
//! flagging overlapping divergent edits as conflicts. Conflicts are a
//! normal outcome, represented as data on the resulting delta; the
//! engine never attempts to resolve them automatically.

pub mod error;
pub mod merge;

pub use error::{MergeError, MergeResult};
pub use merge::merge;
