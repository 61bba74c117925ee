//! Get command implementation.
//!
//! Prints a single variable using the namespaced-then-bare lookup.

use anyhow::Result;
use serde::Serialize;
use siteenv_config::Resolver;
use std::io::Write;

use crate::error::CliError;
use crate::formatters::{OutputFormat, write_json, write_lines};

#[derive(Serialize)]
struct VariableOutput<'a> {
    key: String,
    namespaced_key: String,
    value: &'a str,
}

pub fn run(
    resolver: &Resolver,
    key: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let namespaced_key = resolver.namespaced_key(key);
    let Some(value) = resolver.get(key) else {
        return Err(CliError::VariableNotFound {
            key: key.to_string(),
            namespaced_key,
            bare_key: key.to_ascii_uppercase(),
        }
        .into());
    };

    match format {
        OutputFormat::Text => write_lines(out, [value]),
        OutputFormat::Json => write_json(
            out,
            &VariableOutput {
                key: key.to_ascii_uppercase(),
                namespaced_key,
                value,
            },
        ),
    }
}
