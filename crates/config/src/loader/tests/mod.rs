//! Tests for the `.env` loader.
//!
//! Responsibilities:
//! - Test which files the cascade reads and in what order.
//! - Test the `DOTENV_DISABLED` and pre-set `APP_ENV` gates.
//! - Test that parse errors never leak file contents.
//!
//! Invariants:
//! - Most tests inject a base snapshot with `with_base` and never touch the
//!   process environment.
//! - Tests that read the real process environment use `serial_test`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;


/// Write `contents` to `dir/name`.
pub fn write_env(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write env file");
}
