//! Settings command implementation.
//!
//! Responsibilities:
//! - Resolve the full site settings record.
//! - Print it as `NAME=value` constants (text) or a nested document (JSON).
//!
//! Invariants:
//! - The database password is redacted unless `--show-secrets` is given.

use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use serde::Serialize;
use siteenv_config::{REDACTED, Resolver, SiteSettings};
use std::io::Write;

use crate::formatters::{OutputFormat, write_json, write_lines};

#[derive(Serialize)]
struct DatabaseOutput<'a> {
    name: &'a str,
    user: Option<&'a str>,
    password: Option<String>,
    host: &'a str,
    charset: &'a str,
    collation: &'a str,
}

#[derive(Serialize)]
struct SettingsOutput<'a> {
    environment: &'a str,
    current_domain: &'a str,
    home: &'a str,
    site_url: &'a str,
    cron_disabled: bool,
    database: DatabaseOutput<'a>,
}

impl<'a> SettingsOutput<'a> {
    fn new(settings: &'a SiteSettings, show_secrets: bool) -> Self {
        let db = &settings.database;
        let password = db.password.as_ref().map(|secret| {
            if show_secrets {
                secret.expose_secret().to_string()
            } else {
                REDACTED.to_string()
            }
        });
        Self {
            environment: &settings.environment,
            current_domain: &settings.current_domain,
            home: &settings.home,
            site_url: &settings.site_url,
            cron_disabled: settings.cron_disabled,
            database: DatabaseOutput {
                name: &db.name,
                user: db.user.as_deref(),
                password,
                host: &db.host,
                charset: &db.charset,
                collation: &db.collation,
            },
        }
    }
}

pub fn run(
    resolver: &Resolver,
    show_secrets: bool,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let settings = resolver
        .settings()
        .context("Failed to resolve site settings")?;

    match format {
        OutputFormat::Text => write_lines(
            out,
            settings
                .constants(show_secrets)
                .into_iter()
                .map(|(name, value)| format!("{name}={value}")),
        ),
        OutputFormat::Json => write_json(out, &SettingsOutput::new(&settings, show_secrets)),
    }
}
