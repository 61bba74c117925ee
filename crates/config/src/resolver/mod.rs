//! Namespaced variable resolution for multi-site deployments.
//!
//! Responsibilities:
//! - Hold the app/site identity and the default-site policy.
//! - Look up variables with `APP__SITE__KEY` shadowing a bare `KEY`.
//! - Derive domains, the site matrix, the database name and site settings.
//!
//! Does NOT handle:
//! - Loading `.env` files (see `loader`).
//! - Presenting errors to users (see the CLI crate).
//!
//! Invariants:
//! - Lookup keys are ASCII-uppercased; the snapshot itself is never mutated.
//! - An unset override and an absent variable are `None`, never `""`.
//! - `is_multi_site()` is true exactly when `sites()` has more than one entry.

mod database;
mod error;
mod sites;

pub use database::sanitize_identifier;
pub use error::ResolveError;
pub use sites::Sites;

use tracing::trace;

use crate::constants::{
    APP_ENV, DATABASE_CHARSET_KEY, DATABASE_COLLATION_KEY, DEFAULT_DATABASE_CHARSET,
    DEFAULT_DATABASE_COLLATION, DEFAULT_DOMAINS, DEFAULT_IDENTITY, DEFAULT_SITES, DOMAINS_KEY,
    NAMESPACE_SEPARATOR, SITES_KEY,
};
use crate::store::EnvStore;
use sites::split_list;

/// Resolves configuration values for one app/site pair.
#[derive(Debug, Clone)]
pub struct Resolver {
    env: EnvStore,
    app_name: String,
    site_name: String,
    database_name: Option<String>,
    multi_site_default_site_allowed: bool,
}

impl Resolver {
    /// Create a resolver over an environment snapshot with default identity.
    pub fn new(env: EnvStore) -> Self {
        Self {
            env,
            app_name: DEFAULT_IDENTITY.to_string(),
            site_name: DEFAULT_IDENTITY.to_string(),
            database_name: None,
            multi_site_default_site_allowed: false,
        }
    }

    /// Create a resolver over a snapshot of the current process environment.
    pub fn from_process_env() -> Self {
        Self::new(EnvStore::from_process())
    }

    /// The environment snapshot this resolver reads from.
    pub fn env(&self) -> &EnvStore {
        &self.env
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn set_app_name(&mut self, app_name: impl Into<String>) {
        self.app_name = app_name.into();
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.set_app_name(app_name);
        self
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn set_site_name(&mut self, site_name: impl Into<String>) {
        self.site_name = site_name.into();
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.set_site_name(site_name);
        self
    }

    /// Whether the "default" site may be used as a database name.
    pub fn is_multi_site_default_site_allowed(&self) -> bool {
        self.multi_site_default_site_allowed
    }

    pub fn set_multi_site_default_site_allowed(&mut self, allowed: bool) {
        self.multi_site_default_site_allowed = allowed;
    }

    pub fn with_multi_site_default_site_allowed(mut self, allowed: bool) -> Self {
        self.set_multi_site_default_site_allowed(allowed);
        self
    }

    /// Override the database name. The override is returned verbatim by
    /// `database_name()` and skips all derivation and validation.
    pub fn set_database_name(&mut self, database_name: impl Into<String>) {
        self.database_name = Some(database_name.into());
    }

    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.set_database_name(database_name);
        self
    }

    pub fn database_name_override(&self) -> Option<&str> {
        self.database_name.as_deref()
    }

    /// The `APP__SITE__KEY` form of a lookup key.
    pub fn namespaced_key(&self, key: &str) -> String {
        [
            self.app_name.to_ascii_uppercase(),
            self.site_name.to_ascii_uppercase(),
            key.to_ascii_uppercase(),
        ]
        .join(NAMESPACE_SEPARATOR)
    }

    /// Look up a variable, preferring `APP__SITE__KEY` over the bare `KEY`.
    ///
    /// The key is case-insensitive. Returns `None` if neither form is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        let namespaced = self.namespaced_key(key);
        if let Some(value) = self.env.get(&namespaced) {
            trace!(key = %namespaced, "resolved namespaced variable");
            return Some(value);
        }
        self.env.get(&key.to_ascii_uppercase())
    }

    /// Domains for this environment, in configured order.
    pub fn domains(&self) -> Vec<String> {
        split_list(self.get(DOMAINS_KEY).unwrap_or(DEFAULT_DOMAINS))
    }

    /// The first configured domain.
    pub fn current_domain(&self) -> String {
        // split always yields at least one element
        self.domains().into_iter().next().unwrap_or_default()
    }

    /// Site names for this environment, in configured order.
    pub fn site_names(&self) -> Vec<String> {
        split_list(self.get(SITES_KEY).unwrap_or(DEFAULT_SITES))
    }

    /// The multi-site map of `"{site}.{domain}"` to site name.
    pub fn sites(&self) -> Sites {
        Sites::from_matrix(&self.site_names(), &self.domains())
    }

    pub fn is_multi_site(&self) -> bool {
        self.sites().is_multi_site()
    }

    /// Lowercased `APP_ENV`, read without namespacing.
    pub fn environment_name(&self) -> Result<String, ResolveError> {
        self.env
            .get(APP_ENV)
            .map(str::to_lowercase)
            .ok_or(ResolveError::MissingEnvironment)
    }

    pub fn database_character_set(&self) -> String {
        self.get(DATABASE_CHARSET_KEY)
            .unwrap_or(DEFAULT_DATABASE_CHARSET)
            .to_string()
    }

    pub fn database_collation(&self) -> String {
        self.get(DATABASE_COLLATION_KEY)
            .unwrap_or(DEFAULT_DATABASE_COLLATION)
            .to_string()
    }
}
