//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read identity and policy flags from arguments or `SITEENV_*` variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load `.env` files (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "siteenv")]
#[command(about = "Resolve multi-site app configuration from environment variables", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  siteenv --app earth --site antarctica database-name\n  siteenv --site tenant1 settings --output json\n  siteenv sites\n  siteenv get database_url\n"
)]
pub struct Cli {
    /// App name used in the APP__SITE__KEY lookup namespace
    #[arg(long, global = true, env = "SITEENV_APP", default_value = "default")]
    pub app: String,

    /// Site name used in the lookup namespace and as the fallback database name
    #[arg(long, global = true, env = "SITEENV_SITE", default_value = "default")]
    pub site: String,

    /// Allow the "default" site to be used as a database name
    #[arg(long, global = true, env = "SITEENV_ALLOW_DEFAULT_SITE")]
    pub allow_default_site: bool,

    /// Use this database name verbatim instead of deriving one
    #[arg(long, global = true, env = "SITEENV_DATABASE_NAME")]
    pub database_name: Option<String>,

    /// Directory holding the .env files (defaults to the working directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a variable, preferring its APP__SITE__ namespaced form
    Get {
        /// Variable name (case-insensitive)
        key: String,
    },

    /// List the configured domains in order
    Domains,

    /// Show the site.domain to site matrix
    Sites,

    /// Print the database name for the current site
    DatabaseName,

    /// Show all resolved settings as framework constants
    Settings {
        /// Print the database password instead of a placeholder
        #[arg(long)]
        show_secrets: bool,
    },
}
