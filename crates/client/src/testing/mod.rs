//! Testing utilities for Atlas client tests.
//!
//! Fixture loading plus proptest strategies for Atlas documents.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use atlas_client::testing::{load_fixture, strategies::whitelist_entry_json};
//!
//! let fixture = load_fixture("clusters/list_clusters.json");
//! ```

pub mod strategies;

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "clusters/get_cluster.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// An Atlas list document wrapping `results`.
pub fn page_json(results: Vec<serde_json::Value>, total_count: u64) -> serde_json::Value {
    serde_json::json!({
        "results": results,
        "totalCount": total_count,
        "links": [],
    })
}
