//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handler they select.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;

use crate::args::Cli;
use crate::commands;

/// Run the command selected by `cli` against a loaded configuration.
pub(crate) async fn run_command(cli: Cli, config: atlas_config::Config) -> Result<()> {
    let client = commands::build_client_from_config(&config)?;
    commands::list::run(&client, cli.resource, cli.id.as_deref(), cli.format).await
}
