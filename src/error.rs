//! Error types for Tessera

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TesseraError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Asset is not defined: {0}")]
    AssetNotDefined(String),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedConfigFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TesseraError>;
