//! Service lookup contracts consumed by helper factories
//!
//! Factories only need a narrow "get service by name" capability. Two
//! shapes of caller context exist:
//! - a configurable service manager, which is the locator itself
//! - a helper plugin manager, which wraps the application locator and hands
//!   it out through [`PluginManager::service_locator`]
//!
//! [`ServiceContext`] adapts either shape to a plain [`ServiceLocator`] so
//! that factory logic never has to care which one it was given.

mod manager;

pub use manager::{HelperPluginManager, ServiceManager};

use serde_json::Value;

/// Name of the service holding the application configuration
pub const CONFIG_SERVICE: &str = "config";

/// Resolves named services
pub trait ServiceLocator {
    /// Get a service by name, `None` when it is not registered
    fn get(&self, name: &str) -> Option<&Value>;

    /// Check if a service is registered
    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// A scoped plugin manager that delegates application services to its parent
pub trait PluginManager {
    fn service_locator(&self) -> &dyn ServiceLocator;
}

/// The context a factory is invoked with
#[derive(Clone, Copy)]
pub enum ServiceContext<'a> {
    /// A configurable locator, usable as-is
    Modern(&'a dyn ServiceLocator),
    /// A plugin manager that must be unwrapped to reach the real locator
    Legacy(&'a dyn PluginManager),
}

impl<'a> ServiceContext<'a> {
    /// The locator application services should be fetched from
    pub fn resolve(self) -> &'a dyn ServiceLocator {
        match self {
            ServiceContext::Modern(locator) => locator,
            ServiceContext::Legacy(plugins) => {
                tracing::trace!("unwrapping plugin manager to its parent service locator");
                plugins.service_locator()
            }
        }
    }
}

impl<'a> From<&'a ServiceManager> for ServiceContext<'a> {
    fn from(manager: &'a ServiceManager) -> Self {
        ServiceContext::Modern(manager)
    }
}

impl<'a> From<&'a HelperPluginManager> for ServiceContext<'a> {
    fn from(plugins: &'a HelperPluginManager) -> Self {
        ServiceContext::Legacy(plugins)
    }
}
