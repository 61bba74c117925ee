//! Database name derivation.
//!
//! Responsibilities:
//! - Pick the database name from the override, the `database_url` path,
//!   `database_name`, or the site name, in that order.
//! - Refuse the shared "default" site unless explicitly allowed.
//! - Reject candidates with no identifier characters.
//!
//! Invariants:
//! - An override is returned verbatim without validation.
//! - An absent or unparsable `database_url` behaves like a URL without a path.
//! - Validation checks a sanitized copy; the unsanitized candidate is returned.

use tracing::{debug, warn};
use url::Url;

use super::{ResolveError, Resolver};
use crate::constants::{DATABASE_NAME_KEY, DATABASE_URL_KEY, DEFAULT_IDENTITY};

/// Strip every character outside `[A-Za-z0-9_]`.
pub fn sanitize_identifier(candidate: &str) -> String {
    candidate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// A URL path that names no database ("", "/", or whitespace around them).
fn is_blank_path(path: &str) -> bool {
    let trimmed = path.trim();
    trimmed.is_empty() || trimmed == "/"
}

impl Resolver {
    /// Parse `database_url`, treating parse failures as absence.
    pub(crate) fn database_url(&self) -> Option<Url> {
        let raw = self.get(DATABASE_URL_KEY)?;
        match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!(error = %e, "database_url is not a valid URL; ignoring it");
                None
            }
        }
    }

    /// Derive the database name for the current site.
    ///
    /// # Errors
    ///
    /// - `ResolveError::UnsafeDefaultSite` if the name would fall back to the
    ///   "default" site and that is not allowed.
    /// - `ResolveError::UnresolvableDatabaseName` if the candidate contains no
    ///   identifier characters.
    pub fn database_name(&self) -> Result<String, ResolveError> {
        if let Some(name) = &self.database_name {
            return Ok(name.clone());
        }

        let path = self.database_url().map(|url| url.path().to_string());
        let candidate = match path.as_deref() {
            Some(path) if !is_blank_path(path) => {
                debug!("database name taken from database_url path");
                path.strip_prefix('/').unwrap_or(path).to_string()
            }
            _ => self.multi_site_database_name()?,
        };

        if sanitize_identifier(&candidate).is_empty() {
            return Err(ResolveError::UnresolvableDatabaseName);
        }
        Ok(candidate)
    }

    /// No database in the URL: use `database_name`, else the site name.
    fn multi_site_database_name(&self) -> Result<String, ResolveError> {
        if let Some(name) = self.get(DATABASE_NAME_KEY).filter(|name| !name.is_empty()) {
            debug!("database name taken from database_name");
            return Ok(name.to_string());
        }

        let site_name = self.site_name();
        if site_name == DEFAULT_IDENTITY && !self.is_multi_site_default_site_allowed() {
            warn!(
                app = %self.app_name(),
                "refusing to use the default site as a database name"
            );
            return Err(ResolveError::UnsafeDefaultSite {
                site: site_name.to_string(),
            });
        }
        debug!(site = %site_name, "database name taken from site name");
        Ok(site_name.to_string())
    }
}
