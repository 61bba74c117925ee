//! siteenv - inspect multi-site configuration resolved from the environment.
//!
//! Responsibilities:
//! - Parse command-line arguments and identity flags.
//! - Load the environment snapshot (process variables plus `.env` files).
//! - Run the requested derivation and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Resolution logic (see the `siteenv-config` crate).
//!
//! Invariants:
//! - CLI arguments are parsed BEFORE `.env` loading because `--project-dir`
//!   selects the files; `SITEENV_*` flag fallbacks come from the real environment.
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use siteenv_config::{DotenvLoader, Resolver};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> Result<()> {
    let mut loader = DotenvLoader::new();
    if let Some(ref dir) = cli.project_dir {
        loader = loader.with_project_dir(dir.clone());
    }
    let loaded = loader.load().context("Failed to load environment")?;

    let resolver = build_resolver(cli, Resolver::new(loaded.into_env()));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(cli, &resolver, &mut out)
}

/// Apply identity, policy and override flags to a resolver.
fn build_resolver(cli: &Cli, resolver: Resolver) -> Resolver {
    let mut resolver = resolver
        .with_app_name(cli.app.clone())
        .with_site_name(cli.site.clone())
        .with_multi_site_default_site_allowed(cli.allow_default_site);
    if let Some(ref name) = cli.database_name {
        resolver.set_database_name(name.clone());
    }
    resolver
}
