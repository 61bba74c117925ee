//! Environment loading from the process and `.env` files.
//!
//! Responsibilities:
//! - Snapshot the process environment into an `EnvStore`.
//! - Layer `.env`, `.env.local`, `.env.<env>` and `.env.<env>.local` files
//!   (or a lone `.env.dev`) underneath the real environment.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Variable lookup or derivation (see `resolver`).
//!
//! Invariants / Assumptions:
//! - Real process variables always take precedence over file values.
//! - The process environment is never modified.
//! - A defined `APP_ENV` means the environment is already configured; no file is read.

mod dotenv;
mod error;

pub use dotenv::{DotenvLoader, LoadedEnv};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
