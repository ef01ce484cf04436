//! View helpers
//!
//! Helpers are small objects handed to view scripts during rendering:
//! - [`AssetHelper`] resolves logical asset names to published paths
//! - [`service::AssetFactory`] builds it from application configuration

pub mod asset;
pub mod service;

pub use asset::{AssetHelper, ResourceMap};
pub use service::AssetFactory;
