//! JSON output formatting

use crate::output::formatter::Report;
use serde_json::{json, Value};

pub fn format_json(report: &Report) -> String {
    let data: Value = match report {
        Report::Asset { name, path } => json!({ "asset": name, "path": path }),
        Report::ResourceMap { resource_map } => json!({ "resource_map": resource_map }),
        Report::Placeholder {
            key,
            items,
            rendered,
        } => json!({ "key": key, "items": items, "rendered": rendered }),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
