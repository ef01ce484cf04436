//! Human-readable output formatting

use crate::output::formatter::Report;
use serde_json::Value;

pub fn format_human(report: &Report) -> String {
    match report {
        Report::Asset { path, .. } => path.clone(),
        Report::ResourceMap { resource_map } => {
            let Some(map) = resource_map else {
                return "No resource map configured".to_string();
            };
            if map.is_empty() {
                return "Resource map is empty".to_string();
            }

            let mut names: Vec<&String> = map.keys().collect();
            names.sort();
            let width = names.iter().map(|n| n.len()).max().unwrap_or(0).max(5);

            let mut output = String::from("Resource Map\n------------\n");
            output.push_str(&format!("{:<width$}  {}\n", "ASSET", "PATH", width = width));
            for name in names {
                output.push_str(&format!(
                    "{:<width$}  {}\n",
                    name,
                    display_value(&map[name.as_str()]),
                    width = width
                ));
            }
            output
        }
        Report::Placeholder { rendered, .. } => rendered.clone(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
