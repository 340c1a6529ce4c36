//! Shared test utilities for atlascli integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env`, no host
//!   `ATLAS_*` variables, no user config file.

#![allow(dead_code)]

use assert_cmd::Command;

pub use atlas_client::testing::{load_fixture, page_json};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GROUP: &str = "5b1e2b8e0f2912c1a6e1c8a7";

/// Path under the Admin API for a project-scoped resource.
pub fn group_path(suffix: &str) -> String {
    format!("/api/atlas/v1.0/groups/{GROUP}{suffix}")
}

/// Returns a hermetic `atlascli` command with no credentials.
pub fn atlascli_bare() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("atlascli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "ATLAS_PUBLIC_KEY",
        "ATLAS_PRIVATE_KEY",
        "ATLAS_USER",
        "ATLAS_KEY",
        "ATLAS_GROUP",
        "ATLAS_BASE_URL",
        "ATLAS_PROFILE",
        "ATLAS_CONFIG_PATH",
        "ATLAS_TIMEOUT",
        "ATLAS_FILE_TIMEOUT",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Returns a hermetic `atlascli` command pointed at `server` with a key pair
/// and project.
pub fn atlascli(server: &MockServer) -> Command {
    let mut cmd = atlascli_bare();
    cmd.env("ATLAS_BASE_URL", server.uri())
        .env("ATLAS_PUBLIC_KEY", "PUBLIC")
        .env("ATLAS_PRIVATE_KEY", "PRIVATE")
        .env("ATLAS_GROUP", GROUP);
    cmd
}
