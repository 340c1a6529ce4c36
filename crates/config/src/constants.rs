//! Centralized constants for the Atlas client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Default Atlas Cloud base URL.
pub const DEFAULT_BASE_URL: &str = "https://cloud.mongodb.com";

/// Path prefix of the Atlas Admin API, version 1.0.
pub const API_PATH_PREFIX: &str = "/api/atlas/v1.0";

/// Authentication database used by Atlas database users.
pub const DEFAULT_AUTH_DATABASE: &str = "admin";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default timeout for file downloads (compressed host logs) in seconds.
pub const DEFAULT_FILE_TIMEOUT_SECS: u64 = 360;

/// Maximum allowed timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Pagination
// =============================================================================

/// First page number accepted by Atlas list endpoints.
pub const DEFAULT_PAGE_NUM: u32 = 1;

/// Default number of items requested per page.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 1000;

/// Smallest page size Atlas accepts.
pub const MIN_ITEMS_PER_PAGE: u32 = 1;

/// Largest page size Atlas accepts.
pub const MAX_ITEMS_PER_PAGE: u32 = 2000;

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the programmatic API public key.
pub const ENV_PUBLIC_KEY: &str = "ATLAS_PUBLIC_KEY";

/// Environment variable holding the programmatic API private key.
pub const ENV_PRIVATE_KEY: &str = "ATLAS_PRIVATE_KEY";

/// Legacy alias for [`ENV_PUBLIC_KEY`].
pub const ENV_PUBLIC_KEY_LEGACY: &str = "ATLAS_USER";

/// Legacy alias for [`ENV_PRIVATE_KEY`].
pub const ENV_PRIVATE_KEY_LEGACY: &str = "ATLAS_KEY";

/// Environment variable holding the default project (group) id.
pub const ENV_GROUP: &str = "ATLAS_GROUP";

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "ATLAS_BASE_URL";

/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT: &str = "ATLAS_TIMEOUT";

/// Environment variable overriding the file download timeout (seconds).
pub const ENV_FILE_TIMEOUT: &str = "ATLAS_FILE_TIMEOUT";

/// Environment variable selecting a profile from the config file.
pub const ENV_PROFILE: &str = "ATLAS_PROFILE";

/// Environment variable overriding the config file location.
pub const ENV_CONFIG_PATH: &str = "ATLAS_CONFIG_PATH";
