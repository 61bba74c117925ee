//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Resolver construction (see `main()`).

use anyhow::Result;
use siteenv_config::Resolver;
use std::io::Write;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: &Cli, resolver: &Resolver, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Get { key } => commands::get::run(resolver, key, cli.output, out),
        Commands::Domains => commands::domains::run(resolver, cli.output, out),
        Commands::Sites => commands::sites::run(resolver, cli.output, out),
        Commands::DatabaseName => commands::database::run(resolver, cli.output, out),
        Commands::Settings { show_secrets } => {
            commands::settings::run(resolver, *show_secrets, cli.output, out)
        }
    }
}
