//! Line digests for Weft.
//!
//! Reduces text lines to fixed-width integer digests so line-oriented
//! input can be diffed with the same alignment engine as character
//! input: each line becomes the first 4 bytes of its BLAKE3 hash, read
//! as a big-endian `u32`.
//!
//! Digest equality is a practical approximation of line equality: two
//! different lines can collide in 32 bits. Weft accepts this -- a
//! collision makes the diff treat two differing lines as equal, it never
//! corrupts replay -- and callers that need certainty must compare the
//! lines themselves. This is a documented non-guarantee, not an error
//! condition.

pub mod digest;
pub mod normalize;

pub use digest::{ngram_digest, LineDigester};
pub use normalize::normalize_numbers;
