//! Factories building helpers from application services

mod asset_factory;

pub use asset_factory::{AssetFactory, ASSET_CONFIG_PATH};
