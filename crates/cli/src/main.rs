//! atlascli - Command-line interface for the MongoDB Atlas Admin API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Layer profile file, environment and flags into one configuration.
//! - List Atlas resources via the shared client library.
//!
//! Does NOT handle:
//! - Core business logic or REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only formatted resources.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use atlas_config::ConfigLoader;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose logs `--debug` turns up.
const LOG_TARGETS: [&str; 3] = ["atlascli", "atlas_client", "atlas_config"];

fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        let directives = LOG_TARGETS
            .iter()
            .map(|target| format!("{target}=debug"))
            .collect::<Vec<_>>()
            .join(",");
        return EnvFilter::new(format!("warn,{directives}"));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn build_config(cli: &Cli) -> Result<atlas_config::Config, atlas_config::ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to env var
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(ref profile_name) = cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    // Profile first, then environment, then flags.
    loader = loader.from_profile()?.from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref key) = cli.publickey {
        loader = loader.with_public_key(key.clone());
    }
    if let Some(ref key) = cli.privatekey {
        loader = loader.with_private_key(key.clone());
    }
    if let Some(ref group) = cli.atlasgroup {
        loader = loader.with_group_id(group.clone());
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(log_filter(cli.debug))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if !cli.list {
        tracing::info!("Nothing to do; pass --list to list {}s", cli.resource);
        std::process::exit(ExitCode::Success.as_i32());
    }

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if cli.resource.is_project_scoped() && config.group_id.is_none() {
        tracing::warn!(
            "No project id configured; pass --atlasgroup or set ATLAS_GROUP to list {}s",
            cli.resource
        );
    }
    tracing::debug!(
        public_key = %config.keys.obfuscated(),
        base_url = %config.connection.base_url,
        "Configuration loaded"
    );

    let exit_code = match run_command(cli, config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
