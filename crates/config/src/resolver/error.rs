//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define the failures of database-name and settings derivation.
//! - Distinguish the default-site refusal from plain validation failures.
//!
//! Does NOT handle:
//! - Transport-specific presentation (exit codes, HTTP status); callers map
//!   these variants at their own boundary.
//! - Dotenv loading failures (see `loader::error`).
//!
//! Invariants:
//! - `UnsafeDefaultSite` is the only refusal variant.
//! - No variant carries credentials taken from the environment.

use thiserror::Error;

/// Errors that can occur while resolving configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No usable database name could be derived.
    #[error("Database name could not be computed.")]
    UnresolvableDatabaseName,

    /// The derivation fell back to the shared "default" site in a multi-site
    /// install without an explicit opt-in.
    #[error(
        "The \"{site}\" site in this multi-site install is not allowed. Select a site explicitly (e.g. --site <name>)."
    )]
    UnsafeDefaultSite { site: String },

    #[error("Environment name is not set. Set APP_ENV or provide a .env file.")]
    MissingEnvironment,

    #[error("Database host is not set. Add a host to DATABASE_URL or set DATABASE_HOST.")]
    MissingDatabaseHost,
}

impl ResolveError {
    /// Returns true if this error is a security refusal rather than a
    /// misconfiguration.
    pub const fn is_refusal(&self) -> bool {
        matches!(self, ResolveError::UnsafeDefaultSite { .. })
    }
}
