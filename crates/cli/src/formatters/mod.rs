//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the three output formats: short, full (JSON) and YAML.
//! - Reduce every Atlas model to an identifier plus its JSON document.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Fetching resources (see `commands::list`).
//!
//! Invariants:
//! - Every formatted resource ends with a newline so listings concatenate cleanly.
//! - `full` and `yaml` show the document exactly as the client deserialized it.

use anyhow::Result;

pub use crate::args::OutputFormat;

mod json;
mod resource_impls;
mod short;
mod yaml;

pub use json::JsonFormatter;
pub use resource_impls::ResourceDisplay;
pub use short::ShortFormatter;
pub use yaml::YamlFormatter;

/// A resource reduced to what every formatter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub identifier: String,
    pub document: serde_json::Value,
}

impl Rendered {
    pub fn from_resource<T: ResourceDisplay>(resource: &T) -> Result<Self> {
        Ok(Self {
            identifier: resource.identifier(),
            document: serde_json::to_value(resource)?,
        })
    }
}

/// Render a slice of resources in order.
pub fn render_all<T: ResourceDisplay>(resources: &[T]) -> Result<Vec<Rendered>> {
    resources.iter().map(Rendered::from_resource).collect()
}

/// Trait for formatting Atlas resources.
pub trait Formatter {
    fn format_resource(&self, resource: &Rendered) -> Result<String>;

    fn format_resources(&self, resources: &[Rendered]) -> Result<String> {
        let mut out = String::new();
        for resource in resources {
            out.push_str(&self.format_resource(resource)?);
        }
        Ok(out)
    }
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Short => Box::new(ShortFormatter),
        OutputFormat::Full => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_client::models::Organization;

    fn orgs() -> Vec<Organization> {
        serde_json::from_value(serde_json::json!([
            {"id": "5a0a1e7e0f2912c554080adc", "name": "Acme"},
            {"id": "5a0a1e7e0f2912c554080ae6", "name": "Initech", "isDeleted": true}
        ]))
        .unwrap()
    }

    #[test]
    fn test_render_keeps_order_and_document() {
        let rendered = render_all(&orgs()).unwrap();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].identifier, "5a0a1e7e0f2912c554080adc");
        assert_eq!(rendered[1].document["name"], "Initech");
        assert_eq!(rendered[1].document["isDeleted"], true);
    }

    #[test]
    fn test_every_format_ends_each_resource_with_newline() {
        let rendered = render_all(&orgs()).unwrap();
        for format in [OutputFormat::Short, OutputFormat::Full, OutputFormat::Yaml] {
            let out = get_formatter(format).format_resource(&rendered[0]).unwrap();
            assert!(out.ends_with('\n'), "{format:?}: {out:?}");
        }
    }

    #[test]
    fn test_empty_listing_is_empty() {
        for format in [OutputFormat::Short, OutputFormat::Full, OutputFormat::Yaml] {
            assert_eq!(get_formatter(format).format_resources(&[]).unwrap(), "");
        }
    }
}
