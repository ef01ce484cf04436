//! In-memory service manager and helper plugin manager

use std::collections::HashMap;

use serde_json::Value;

use super::{PluginManager, ServiceLocator, CONFIG_SERVICE};
use crate::config::Config;

/// Configurable store of named services
#[derive(Debug, Clone, Default)]
pub struct ServiceManager {
    services: HashMap<String, Value>,
}

impl ServiceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager exposing `config` as the configuration service
    pub fn with_config(config: Config) -> Self {
        let mut manager = Self::new();
        manager.set_service(CONFIG_SERVICE, config.into_value());
        manager
    }

    /// Register several services at once, replacing existing ones
    pub fn configure<I, K>(&mut self, services: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (name, service) in services {
            self.set_service(name, service);
        }
        self
    }

    /// Register a single service, replacing any existing one
    pub fn set_service(&mut self, name: impl Into<String>, service: Value) -> &mut Self {
        self.services.insert(name.into(), service);
        self
    }
}

impl ServiceLocator for ServiceManager {
    fn get(&self, name: &str) -> Option<&Value> {
        self.services.get(name)
    }
}

/// Plugin manager scoped to view helpers
///
/// Owns the application service manager it was created from.
#[derive(Debug, Clone, Default)]
pub struct HelperPluginManager {
    parent: ServiceManager,
}

impl HelperPluginManager {
    pub fn new(parent: ServiceManager) -> Self {
        Self { parent }
    }
}

impl PluginManager for HelperPluginManager {
    fn service_locator(&self) -> &dyn ServiceLocator {
        &self.parent
    }
}
