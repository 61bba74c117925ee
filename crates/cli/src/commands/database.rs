//! Database-name command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use siteenv_config::Resolver;
use std::io::Write;

use crate::formatters::{OutputFormat, write_json, write_lines};

#[derive(Serialize)]
struct DatabaseNameOutput<'a> {
    app: &'a str,
    site: &'a str,
    database_name: String,
}

pub fn run(resolver: &Resolver, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let database_name = resolver
        .database_name()
        .context("Failed to resolve database name")?;

    match format {
        OutputFormat::Text => write_lines(out, [&database_name]),
        OutputFormat::Json => write_json(
            out,
            &DatabaseNameOutput {
                app: resolver.app_name(),
                site: resolver.site_name(),
                database_name,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_util::{output, resolver};
    use crate::error::{ExitCode, ExitCodeExt};

    #[test]
    fn test_database_name_from_url() {
        let r = resolver(&[("DATABASE_URL", "mysql://u:p@db/shop")]);

        assert_eq!(output(|out| run(&r, OutputFormat::Text, out)), "shop\n");
    }

    #[test]
    fn test_database_name_json() {
        let r = resolver(&[]).with_site_name("tenant1");

        let json = output(|out| run(&r, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["site"], "tenant1");
        assert_eq!(value["database_name"], "tenant1");
    }

    #[test]
    fn test_default_site_refusal_is_unauthorized() {
        let r = resolver(&[]);
        let mut out = Vec::new();

        let err = run(&r, OutputFormat::Text, &mut out).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::Unauthorized);
        assert!(out.is_empty());
    }
}
