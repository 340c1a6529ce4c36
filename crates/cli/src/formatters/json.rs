//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format resources as pretty-printed JSON, one document per resource.
//!
//! Does NOT handle:
//! - Wrapping listings in an array; each resource stands alone.

use crate::formatters::{Formatter, Rendered};
use anyhow::Result;

/// JSON formatter used by `--format full`.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_resource(&self, resource: &Rendered) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&resource.document)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_document() {
        let resource = Rendered {
            identifier: "admin".into(),
            document: serde_json::json!({"username": "admin", "databaseName": "admin"}),
        };
        let out = JsonFormatter.format_resource(&resource).unwrap();
        assert!(out.starts_with("{\n"));
        assert!(out.contains("  \"username\": \"admin\""));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, resource.document);
    }
}
