//! Tessera - view helper primitives for server-side rendering
//!
//! Tessera provides two independent helpers used during one rendering pass:
//! a placeholder [`Registry`] collecting template fragments under names, and
//! an [`AssetHelper`] built from application configuration by
//! [`AssetFactory`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tessera::{AssetFactory, Config, Container, Registry, ServiceManager};
//!
//! let config = Config::from_value(json!({
//!     "view_helper_config": { "asset": { "resource_map": { "logo": "/img/logo-3f2a.png" } } }
//! }));
//! let helper = AssetFactory::new().create(&ServiceManager::with_config(config)).unwrap();
//! assert_eq!(helper.resolve("logo").unwrap(), "/img/logo-3f2a.png");
//!
//! let mut registry = Registry::new();
//! let title = registry.get_container("title", vec![json!("Home")]);
//! assert_eq!(title.borrow().render(), "Home");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod helper;
pub mod output;
pub mod placeholder;
pub mod service;

pub use config::Config;
pub use error::{Result, TesseraError};
pub use helper::{AssetFactory, AssetHelper, ResourceMap};
pub use output::{format_output, OutputFormat, Report};
pub use placeholder::{
    Container, ContainerClass, PlaceholderContainer, Registry, SharedContainer,
};
pub use service::{
    HelperPluginManager, PluginManager, ServiceContext, ServiceLocator, ServiceManager,
};
