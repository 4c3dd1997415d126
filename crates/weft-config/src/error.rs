//! Error types for the settings store.

/// Errors that can occur loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the settings file failed.
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file exists but is not a flat TOML string table.
    #[error("malformed settings file: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for settings results.
pub type ConfigResult<T> = Result<T, ConfigError>;
