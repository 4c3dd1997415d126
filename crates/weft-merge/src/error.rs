//! Error types for the merge crate.

/// Errors that can occur during merge operations.
///
/// A conflict is not an error: it is reported as data on the returned
/// delta, since it is an expected three-way-merge outcome that the
/// caller must arbitrate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// The two deltas were not computed against the same ancestor
    /// sequence, so merging them is meaningless.
    #[error("deltas do not share a common ancestor")]
    AncestorMismatch,
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
