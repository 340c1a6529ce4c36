//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Atlas client against a `wiremock` server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point at the mock server and use project [`GROUP`]

#[allow(unused_imports)]
pub use atlas_client::testing::{load_fixture, page_json};

#[allow(unused_imports)]
pub use atlas_client::{AtlasClient, ClientError, PageRequest};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use atlas_config::ApiKeyPair;

/// Project id used by every client built in tests.
#[allow(dead_code)]
pub const GROUP: &str = "5b1e2b8e0f2912c1a6e1c8a7";

/// API root path as seen by the mock server.
#[allow(dead_code)]
pub const API: &str = "/api/atlas/v1.0";

/// `/api/atlas/v1.0/groups/{GROUP}{suffix}`
#[allow(dead_code)]
pub fn group_path(suffix: &str) -> String {
    format!("{API}/groups/{GROUP}{suffix}")
}

/// A client scoped to [`GROUP`] that talks to `server`.
#[allow(dead_code)]
pub fn client(server: &MockServer) -> AtlasClient {
    AtlasClient::builder()
        .base_url(server.uri())
        .keys(ApiKeyPair::new("PUBLIC", "PRIVATE"))
        .group_id(GROUP)
        .build()
        .expect("client should build")
}

/// A client without a project id.
#[allow(dead_code)]
pub fn unscoped_client(server: &MockServer) -> AtlasClient {
    AtlasClient::builder()
        .base_url(server.uri())
        .keys(ApiKeyPair::new("PUBLIC", "PRIVATE"))
        .build()
        .expect("client should build")
}
