//! Application configuration
//!
//! Configuration is held as a nested JSON value so that helper factories can
//! reach into it by dotted path (`view_helper_config.asset.resource_map`).
//! Files may be written as JSON or TOML.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, TesseraError};

/// Nested key-value application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: Value,
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    /// An empty configuration (a JSON object with no keys)
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Wrap an already-built value
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let root = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str::<Value>(&content)?,
            _ => {
                return Err(TesseraError::UnsupportedConfigFormat(
                    path.display().to_string(),
                ))
            }
        };

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(Self { root })
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Look up a nested value by dotted path, e.g. `view_helper_config.asset`
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |value, segment| value.get(segment))
    }

    /// The whole configuration tree
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}
