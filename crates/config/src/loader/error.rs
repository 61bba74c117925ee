//! Error types for environment loading.
//!
//! Responsibilities:
//! - Define error variants for `.env` file loading failures.
//!
//! Does NOT handle:
//! - Resolution failures (see `resolver::error`).
//!
//! Invariants:
//! - All error variants name the file that failed.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading `.env` files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse a `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse {} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        file.display()
    )]
    DotenvParse { file: PathBuf, error_index: usize },

    /// Failed to read a `.env` file due to an I/O error.
    #[error("Failed to read {}: {kind}", file.display())]
    DotenvIo { file: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error(
        "Failed to load {}. Hint: set DOTENV_DISABLED=1 to skip .env loading",
        file.display()
    )]
    DotenvUnknown { file: PathBuf },
}

impl ConfigError {
    /// Map a dotenvy error for `file` without carrying its message along.
    pub(crate) fn from_dotenv(file: PathBuf, error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, error_index) => {
                ConfigError::DotenvParse { file, error_index }
            }
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                file,
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown { file },
        }
    }
}
