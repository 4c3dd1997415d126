use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// An ordered string key/value store.
///
/// Keys are free-form; front ends conventionally namespace them as
/// `"window/field"`. Values are stored as strings, with typed accessors
/// for the common cases.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    entries: BTreeMap<String, String>,
}

impl Settings {
    /// An empty settings store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file.
    ///
    /// A missing file is not an error: it yields an empty store, so
    /// first launches need no special casing.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = fs::read_to_string(path)?;
        let entries =
            toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Write the settings to a TOML file, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let text = toml::to_string_pretty(&self.entries)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a value and parse it as a boolean.
    ///
    /// Returns `None` both for a missing key and for a value that is not
    /// `"true"` or `"false"`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.parse().ok()
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Remove a key, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Iterate over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
