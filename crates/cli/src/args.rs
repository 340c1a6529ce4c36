//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve key pair and project flags from their `ATLAS_*` environment fallbacks.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge profile files (see `main()` and `atlas_config::ConfigLoader`).

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "atlascli")]
#[command(about = "atlascli - Query MongoDB Atlas from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  atlascli --list\n  atlascli --resource project --list\n  atlascli --resource cluster --id Cluster0 --list --format full\n  atlascli --atlasgroup 5b1e2b8e0f2912c1a6e1c8a7 --resource alert --list --format yaml\n"
)]
pub struct Cli {
    /// Atlas programmatic API public key
    #[arg(long, env = "ATLAS_PUBLIC_KEY", hide_env_values = true)]
    pub publickey: Option<String>,

    /// Atlas programmatic API private key
    #[arg(long, env = "ATLAS_PRIVATE_KEY", hide_env_values = true)]
    pub privatekey: Option<String>,

    /// Default project (group) id for project-scoped resources
    #[arg(long, env = "ATLAS_GROUP")]
    pub atlasgroup: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Short)]
    pub format: OutputFormat,

    /// Resource type to operate on
    #[arg(long, value_enum, default_value_t = Resource::Cluster)]
    pub resource: Resource,

    /// Identifier of a single resource (cluster name, username, project id, ...)
    #[arg(long)]
    pub id: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// List the selected resource(s)
    #[arg(long)]
    pub list: bool,

    /// Atlas server root (e.g., https://cloud.mongodb.com)
    #[arg(long, env = "ATLAS_BASE_URL")]
    pub base_url: Option<String>,

    /// Profile name to load from the config file
    #[arg(long, env = "ATLAS_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via ATLAS_CONFIG_PATH environment variable.
    #[arg(long, env = "ATLAS_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One identifier per line
    Short,
    /// Pretty-printed JSON documents
    Full,
    /// YAML documents
    Yaml,
}

/// Resource types reachable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Organization,
    Project,
    Cluster,
    DatabaseUser,
    Alert,
    Process,
    Whitelist,
    MaintenanceWindow,
}

impl Resource {
    /// Whether the resource lives under `/groups/{GROUP-ID}`.
    pub fn is_project_scoped(self) -> bool {
        !matches!(self, Self::Organization | Self::Project)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Organization => "organization",
            Self::Project => "project",
            Self::Cluster => "cluster",
            Self::DatabaseUser => "database-user",
            Self::Alert => "alert",
            Self::Process => "process",
            Self::Whitelist => "whitelist",
            Self::MaintenanceWindow => "maintenance-window",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["atlascli"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Short);
        assert_eq!(cli.resource, Resource::Cluster);
        assert!(!cli.list);
        assert!(!cli.debug);
    }

    #[test]
    fn test_kebab_case_resources() {
        let cli = Cli::try_parse_from(["atlascli", "--resource", "database-user", "--list"])
            .unwrap();
        assert_eq!(cli.resource, Resource::DatabaseUser);
        assert_eq!(cli.resource.to_string(), "database-user");

        let cli = Cli::try_parse_from(["atlascli", "--resource", "maintenance-window"]).unwrap();
        assert_eq!(cli.resource, Resource::MaintenanceWindow);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["atlascli", "--format", "table"]).is_err());
    }

    #[test]
    fn test_scope() {
        assert!(!Resource::Project.is_project_scoped());
        assert!(!Resource::Organization.is_project_scoped());
        assert!(Resource::Whitelist.is_project_scoped());
    }
}
