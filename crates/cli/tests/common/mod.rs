//! Shared test utilities for siteenv integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - The host environment is cleared so no DATABASE_URL, DOMAINS, SITES or
//!   SITEENV_* variable leaks into a test.
//! - `DOTENV_DISABLED=1` is set unless a test removes it.

use assert_cmd::Command;

/// Returns a hermetic `siteenv` command for integration testing.
pub fn siteenv_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("siteenv");

    // Hermeticity: start from an empty environment
    cmd.env_clear();

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd
}
