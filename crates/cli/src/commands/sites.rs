//! Sites command implementation.
//!
//! Shows the composite `site.domain` keys and whether the install is multi-site.

use anyhow::Result;
use serde::Serialize;
use siteenv_config::{Resolver, Sites};
use std::io::Write;

use crate::formatters::{OutputFormat, write_json, write_lines};

#[derive(Serialize)]
struct SitesOutput {
    multi_site: bool,
    sites: Sites,
}

pub fn run(resolver: &Resolver, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let sites = resolver.sites();
    let multi_site = sites.is_multi_site();

    match format {
        OutputFormat::Text => write_lines(
            out,
            sites.iter().map(|(key, site)| format!("{key}\t{site}")),
        ),
        OutputFormat::Json => write_json(out, &SitesOutput { multi_site, sites }),
    }
}
