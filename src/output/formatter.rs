//! Output formatting

use serde_json::Value;

use crate::helper::ResourceMap;
use crate::output::human::format_human;
use crate::output::json::format_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Result of one CLI command
#[derive(Debug, Clone)]
pub enum Report {
    /// A resolved asset
    Asset { name: String, path: String },
    /// The configured resource map, if any
    ResourceMap { resource_map: Option<ResourceMap> },
    /// A rendered placeholder container
    Placeholder {
        key: String,
        items: Vec<Value>,
        rendered: String,
    },
}

pub fn format_output(report: &Report, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}
