//! Short formatter: one identifier per line.

use crate::formatters::{Formatter, Rendered};
use anyhow::Result;

pub struct ShortFormatter;

impl Formatter for ShortFormatter {
    fn format_resource(&self, resource: &Rendered) -> Result<String> {
        Ok(format!("{}\n", resource.identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let resources = ["Cluster0", "Cluster1"].map(|name| Rendered {
            identifier: name.to_string(),
            document: serde_json::json!({"name": name}),
        });
        let out = ShortFormatter.format_resources(&resources).unwrap();
        assert_eq!(out, "Cluster0\nCluster1\n");
    }
}
