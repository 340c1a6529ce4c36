//! YAML formatter implementation.
//!
//! Each resource is emitted as its own YAML document so a listing can be
//! read back with any multi-document YAML loader.

use crate::formatters::{Formatter, Rendered};
use anyhow::Result;

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_resource(&self, resource: &Rendered) -> Result<String> {
        Ok(format!("---\n{}", serde_yaml::to_string(&resource.document)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_marker() {
        let resource = Rendered {
            identifier: "Cluster0".into(),
            document: serde_json::json!({"name": "Cluster0", "diskSizeGB": 10.0}),
        };
        let out = YamlFormatter.format_resource(&resource).unwrap();
        assert!(out.starts_with("---\n"));
        assert!(out.contains("name: Cluster0\n"));

        let parsed: serde_json::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed, resource.document);
    }
}
