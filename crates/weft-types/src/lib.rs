//! Foundation types for Weft.
//!
//! Defines the value types shared by the diff and merge engines:
//!
//! - [`EditKind`] -- the three kinds of contiguous change
//! - [`RawEdit`] -- edit geometry, before content is attached
//! - [`Edit`] -- a resolved edit carrying its removed/inserted content
//! - [`Delta`] -- the result of a diff or merge over one sequence pair
//!
//! These types hold no algorithms; the engines in `weft-diff` and
//! `weft-merge` produce and consume them.

pub mod delta;
pub mod edit;

pub use delta::Delta;
pub use edit::{Edit, EditKind, RawEdit};
