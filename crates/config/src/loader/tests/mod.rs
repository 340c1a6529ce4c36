//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, cleared so the host environment cannot leak in.
pub const ATLAS_VARS: [&str; 10] = [
    "ATLAS_PUBLIC_KEY",
    "ATLAS_PRIVATE_KEY",
    "ATLAS_USER",
    "ATLAS_KEY",
    "ATLAS_GROUP",
    "ATLAS_BASE_URL",
    "ATLAS_TIMEOUT",
    "ATLAS_FILE_TIMEOUT",
    "ATLAS_PROFILE",
    "ATLAS_CONFIG_PATH",
];

/// Run `f` with all Atlas variables unset except the given overrides.
pub fn with_atlas_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let vars: Vec<(&str, Option<&str>)> = ATLAS_VARS
        .iter()
        .map(|name| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| *v);
            (*name, value)
        })
        .collect();
    temp_env::with_vars(vars, f);
}
