//! Multi-site configuration resolution from environment variables.
//!
//! This crate snapshots the environment (optionally layered with `.env`
//! files), resolves per-app/per-site variables, and derives the domain list,
//! the site matrix, a safe per-site database name and the site settings.

pub mod constants;
mod loader;
mod resolver;
mod settings;
mod store;

pub use loader::{ConfigError, DotenvLoader, LoadedEnv};
pub use resolver::{ResolveError, Resolver, Sites, sanitize_identifier};
pub use settings::{DatabaseSettings, REDACTED, SiteSettings};
pub use store::EnvStore;
