//! Asset view helper
//!
//! Resolves logical asset names (`"logo"`) to their published paths through
//! a resource map supplied by configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TesseraError};

/// Logical asset name to resolved path/metadata
pub type ResourceMap = HashMap<String, Value>;

/// Resolves asset names for view scripts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetHelper {
    resource_map: Option<ResourceMap>,
}

impl AssetHelper {
    /// Create a helper with no resource map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_resource_map(&mut self, resource_map: ResourceMap) -> &mut Self {
        self.resource_map = Some(resource_map);
        self
    }

    pub fn resource_map(&self) -> Option<&ResourceMap> {
        self.resource_map.as_ref()
    }

    /// Resolve an asset to its path
    ///
    /// String entries are returned verbatim; any other metadata is returned
    /// as its JSON text.
    pub fn resolve(&self, asset: &str) -> Result<String> {
        let value = self
            .resource_map
            .as_ref()
            .and_then(|map| map.get(asset))
            .ok_or_else(|| TesseraError::AssetNotDefined(asset.to_string()))?;

        Ok(match value {
            Value::String(path) => path.clone(),
            other => other.to_string(),
        })
    }
}
