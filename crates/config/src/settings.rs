//! Resolved site settings handed to the consuming framework.
//!
//! Responsibilities:
//! - Collect everything a CMS bootstrap needs (environment, URLs, database
//!   connection) into one record.
//! - Render the record as the named constants the CMS expects.
//!
//! Does NOT handle:
//! - Defining process-wide constants; callers do that with the record.
//!
//! Invariants:
//! - The database password is held as a `SecretString` and redacted in
//!   `Debug` output and in `constants(false)`.
//! - Credentials embedded in `database_url` win over the separate variables.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::constants::{
    ADMIN_KEY, CRON_KEY, DATABASE_HOST_KEY, DATABASE_PASSWORD_KEY, DATABASE_USER_KEY,
    DEFAULT_ADMIN_PATH, HOME_SCHEME,
};
use crate::resolver::{ResolveError, Resolver};

/// Placeholder printed in place of secrets.
pub const REDACTED: &str = "********";

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub name: String,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    /// Host, with `:port` appended when the URL carries one.
    pub host: String,
    pub charset: String,
    pub collation: String,
}

/// Everything resolved for one site.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub environment: String,
    pub current_domain: String,
    pub home: String,
    pub site_url: String,
    pub cron_disabled: bool,
    pub database: DatabaseSettings,
}

impl SiteSettings {
    /// Ordered constant name/value pairs for the consuming CMS.
    ///
    /// The password is replaced with [`REDACTED`] unless `expose_secrets`.
    /// Unset user and password render as empty strings.
    pub fn constants(&self, expose_secrets: bool) -> Vec<(&'static str, String)> {
        let password = match &self.database.password {
            Some(_) if !expose_secrets => REDACTED.to_string(),
            Some(secret) => secret.expose_secret().to_string(),
            None => String::new(),
        };
        vec![
            ("WP_ENV", self.environment.clone()),
            ("WP_HOME", self.home.clone()),
            ("WP_SITEURL", self.site_url.clone()),
            ("DOMAIN_CURRENT_SITE", self.current_domain.clone()),
            ("DISABLE_WP_CRON", self.cron_disabled.to_string()),
            ("DB_NAME", self.database.name.clone()),
            ("DB_USER", self.database.user.clone().unwrap_or_default()),
            ("DB_PASSWORD", password),
            ("DB_HOST", self.database.host.clone()),
            ("DB_CHARSET", self.database.charset.clone()),
            ("DB_COLLATE", self.database.collation.clone()),
        ]
    }
}

/// A flag value counts as set unless it is empty or "0".
fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}

impl Resolver {
    /// Resolve the full settings record for the current site.
    ///
    /// # Errors
    ///
    /// Propagates database-name failures (including the default-site refusal),
    /// `ResolveError::MissingEnvironment` and `ResolveError::MissingDatabaseHost`.
    pub fn settings(&self) -> Result<SiteSettings, ResolveError> {
        let environment = self.environment_name()?;
        let current_domain = self.current_domain();
        let home = format!("{HOME_SCHEME}://{current_domain}");
        let site_url = self
            .get(ADMIN_KEY)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{home}{DEFAULT_ADMIN_PATH}"));
        let cron_disabled = self.get(CRON_KEY).is_some_and(is_truthy);

        let database = self.database_settings()?;
        debug!(
            environment = %environment,
            domain = %current_domain,
            database = %database.name,
            "resolved site settings"
        );

        Ok(SiteSettings {
            environment,
            current_domain,
            home,
            site_url,
            cron_disabled,
            database,
        })
    }

    fn database_settings(&self) -> Result<DatabaseSettings, ResolveError> {
        let name = self.database_name()?;
        let url = self.database_url();

        let user = url
            .as_ref()
            .map(|u| u.username())
            .filter(|user| !user.is_empty())
            .or_else(|| self.get(DATABASE_USER_KEY))
            .map(str::to_string);
        let password = url
            .as_ref()
            .and_then(|u| u.password())
            .or_else(|| self.get(DATABASE_PASSWORD_KEY))
            .map(|p| SecretString::from(p.to_string()));
        let host = url
            .as_ref()
            .and_then(|u| {
                let host = u.host_str().filter(|h| !h.is_empty())?;
                Some(match u.port() {
                    Some(port) => format!("{host}:{port}"),
                    None => host.to_string(),
                })
            })
            .or_else(|| self.get(DATABASE_HOST_KEY).map(str::to_string))
            .ok_or(ResolveError::MissingDatabaseHost)?;

        Ok(DatabaseSettings {
            name,
            user,
            password,
            host,
            charset: self.database_character_set(),
            collation: self.database_collation(),
        })
    }
}
