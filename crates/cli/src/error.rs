//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map resolution and CLI errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - The default-site refusal always maps to `Unauthorized`.

use siteenv_config::ResolveError;
use thiserror::Error;

/// Errors raised by the CLI itself rather than the resolver.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Variable {key} is not set (checked {namespaced_key} and {bare_key})")]
    VariableNotFound {
        key: String,
        namespaced_key: String,
        bare_key: String,
    },
}

/// Structured exit codes for siteenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure, including unreadable `.env` files.
    GeneralError = 1,

    /// Unauthorized - the request would run against the shared "default" site.
    ///
    /// Callers should select a site explicitly or opt in with `--allow-default-site`.
    Unauthorized = 2,

    /// Not found - a requested variable is not set.
    NotFound = 4,

    /// Validation error - configuration cannot produce a usable value.
    ///
    /// Scripts should fix the configuration and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ResolveError> for ExitCode {
    fn from(err: &ResolveError) -> Self {
        match err {
            ResolveError::UnsafeDefaultSite { .. } => ExitCode::Unauthorized,
            ResolveError::UnresolvableDatabaseName
            | ResolveError::MissingEnvironment
            | ResolveError::MissingDatabaseHost => ExitCode::ValidationError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::VariableNotFound { .. } => ExitCode::NotFound,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(resolve_err) = cause.downcast_ref::<ResolveError>() {
                return ExitCode::from(resolve_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }

        ExitCode::GeneralError
    }
}
