//! Factory building the asset helper from application configuration

use serde_json::Value;

use crate::error::{Result, TesseraError};
use crate::helper::asset::{AssetHelper, ResourceMap};
use crate::service::{ServiceContext, ServiceLocator, CONFIG_SERVICE};

/// Configuration path of the asset helper section
pub const ASSET_CONFIG_PATH: [&str; 2] = ["view_helper_config", "asset"];

/// Builds [`AssetHelper`] instances
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetFactory;

impl AssetFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build a helper from the `config` service of `services`
    ///
    /// A missing `view_helper_config.asset` section leaves the helper
    /// unconfigured. A section whose `resource_map` is absent or not a map
    /// is a configuration error.
    pub fn create(&self, services: &dyn ServiceLocator) -> Result<AssetHelper> {
        let mut helper = AssetHelper::new();

        let section = services
            .get(CONFIG_SERVICE)
            .and_then(asset_section);

        let Some(section) = section else {
            tracing::debug!("no asset helper configuration, leaving resource map unset");
            return Ok(helper);
        };

        match section.get("resource_map") {
            Some(Value::Object(map)) => {
                let resource_map: ResourceMap = map
                    .iter()
                    .map(|(name, meta)| (name.clone(), meta.clone()))
                    .collect();
                tracing::debug!(assets = resource_map.len(), "applying asset resource map");
                helper.set_resource_map(resource_map);
                Ok(helper)
            }
            _ => Err(TesseraError::Configuration(
                "Invalid resource map configuration".to_string(),
            )),
        }
    }

    /// Build a helper from either shape of service context
    pub fn create_service<'a>(&self, context: impl Into<ServiceContext<'a>>) -> Result<AssetHelper> {
        self.create(context.into().resolve())
    }
}

fn asset_section(config: &Value) -> Option<&Value> {
    ASSET_CONFIG_PATH
        .iter()
        .try_fold(config, |value, key| value.get(*key))
        .filter(|section| !section.is_null())
}
