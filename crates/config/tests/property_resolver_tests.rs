//! Property-based tests for variable lookup and derivations.
//!
//! Test coverage:
//! - Namespaced lookups shadow bare ones for any key and identity.
//! - Domain splitting preserves order and count.
//! - The site matrix has one entry per distinct composite key.
//! - Database names from URL paths are returned without the leading slash.

use proptest::prelude::*;
use std::collections::HashSet;

use siteenv_config::{EnvStore, Resolver, sanitize_identifier};

/// Strategy for identity and key names as they appear in deployments.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}".prop_map(String::from)
}

/// Strategy for comma-free list items (domains or site names).
fn item_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9.-]{0,12}".prop_map(String::from)
}

proptest! {
    #[test]
    fn prop_namespaced_shadows_bare(
        app in name_strategy(),
        site in name_strategy(),
        key in name_strategy(),
        scoped in "[a-zA-Z0-9]{1,16}",
        bare in "[a-zA-Z0-9]{1,16}",
    ) {
        let namespaced = format!(
            "{}__{}__{}",
            app.to_uppercase(),
            site.to_uppercase(),
            key.to_uppercase()
        );
        let env = EnvStore::new()
            .with(namespaced, scoped.clone())
            .with(key.to_uppercase(), bare.clone());
        let r = Resolver::new(env).with_app_name(app).with_site_name(site);

        prop_assert_eq!(r.get(&key), Some(scoped.as_str()));
    }

    #[test]
    fn prop_bare_returned_without_namespace(
        site in name_strategy(),
        key in name_strategy(),
        bare in "[a-zA-Z0-9]{0,16}",
    ) {
        let env = EnvStore::new().with(key.to_uppercase(), bare.clone());
        let r = Resolver::new(env).with_site_name(site);

        prop_assert_eq!(r.get(&key), Some(bare.as_str()));
    }

    #[test]
    fn prop_domains_round_trip(domains in prop::collection::vec(item_strategy(), 1..6)) {
        let env = EnvStore::new().with("DOMAINS", domains.join(","));
        let r = Resolver::new(env);

        prop_assert_eq!(r.domains(), domains);
    }

    #[test]
    fn prop_sites_count_matches_distinct_keys(
        sites in prop::collection::vec(item_strategy(), 1..4),
        domains in prop::collection::vec(item_strategy(), 1..4),
    ) {
        let env = EnvStore::new()
            .with("SITES", sites.join(","))
            .with("DOMAINS", domains.join(","));
        let r = Resolver::new(env);

        let expected: HashSet<String> = sites
            .iter()
            .flat_map(|s| domains.iter().map(move |d| format!("{s}.{d}")))
            .collect();
        prop_assert_eq!(r.sites().len(), expected.len());
        prop_assert_eq!(r.is_multi_site(), expected.len() > 1);
    }

    #[test]
    fn prop_url_path_is_database_name(db in "[a-z][a-z0-9_]{0,20}") {
        let env = EnvStore::new().with("DATABASE_URL", format!("mysql://u:p@host/{db}"));
        let r = Resolver::new(env);

        prop_assert_eq!(r.database_name().unwrap(), db);
    }

    #[test]
    fn prop_sanitize_keeps_only_identifier_chars(input in ".{0,32}") {
        let cleaned = sanitize_identifier(&input);

        prop_assert!(cleaned.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}
