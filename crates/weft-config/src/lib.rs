//! Caller-owned settings for Weft front ends.
//!
//! A plain key/value store with explicit [`Settings::load`] and
//! [`Settings::save`] calls. There is no singleton and no implicit I/O:
//! the embedding application owns the value, injects it where needed,
//! and decides when it touches disk. The on-disk format is a flat TOML
//! table.

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::Settings;
