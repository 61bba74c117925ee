//! Domains command implementation.

use anyhow::Result;
use siteenv_config::Resolver;
use std::io::Write;

use crate::formatters::{OutputFormat, write_json, write_lines};

pub fn run(resolver: &Resolver, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let domains = resolver.domains();
    match format {
        OutputFormat::Text => write_lines(out, &domains),
        OutputFormat::Json => write_json(out, &domains),
    }
}
