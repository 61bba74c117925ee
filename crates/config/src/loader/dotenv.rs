//! `.env` file cascade.
//!
//! Responsibilities:
//! - Decide which `.env` files apply to the project directory.
//! - Parse them with `dotenvy` and merge them under the process environment.
//! - Default `APP_ENV` when files are loaded without one.
//!
//! Does NOT handle:
//! - Writing to the process environment. The result is an `EnvStore`.
//!
//! Invariants / Assumptions:
//! - Later files override earlier files, never a variable from the base snapshot.
//! - `${NAME}` references see the base snapshot, then values from earlier files.
//! - Missing optional files are skipped; unreadable or malformed files are errors.
//! - `DOTENV_DISABLED` and a pre-set `APP_ENV` are read from the base snapshot.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigError;
use crate::constants::{APP_ENV, DEFAULT_APP_ENV, DOTENV_DISABLED, TEST_APP_ENV};
use crate::store::EnvStore;

/// Environment snapshot produced by [`DotenvLoader::load`].
#[derive(Debug, Clone)]
pub struct LoadedEnv {
    env: EnvStore,
    loaded_files: Vec<PathBuf>,
}

impl LoadedEnv {
    pub fn env(&self) -> &EnvStore {
        &self.env
    }

    pub fn into_env(self) -> EnvStore {
        self.env
    }

    /// Files that were read, in load order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }
}

/// Builds an environment snapshot from the process and `.env` files.
#[derive(Debug, Clone, Default)]
pub struct DotenvLoader {
    project_dir: Option<PathBuf>,
    base: Option<EnvStore>,
}

/// File values accumulated during one load.
struct Overlay<'a> {
    base: &'a EnvStore,
    vars: HashMap<String, String>,
    files: Vec<PathBuf>,
}

impl<'a> Overlay<'a> {
    fn new(base: &'a EnvStore) -> Self {
        Self {
            base,
            vars: HashMap::new(),
            files: Vec::new(),
        }
    }

    /// Value a `${NAME}` reference sees: the base snapshot, then earlier files.
    fn reference_value(&self, name: &str) -> Option<&str> {
        self.base
            .get(name)
            .or_else(|| self.vars.get(name).map(String::as_str))
    }

    fn load(&mut self, path: PathBuf) -> Result<(), ConfigError> {
        let contents = fs::read_to_string(&path).map_err(|e| ConfigError::DotenvIo {
            file: path.clone(),
            kind: e.kind(),
        })?;
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

        // dotenvy only expands against the process and the current file, so
        // referenced names are defined ahead of the file's own lines.
        let mut prelude = String::new();
        let mut prelude_len = 0;
        for name in referenced_names(contents) {
            if let Some(value) = self.reference_value(name) {
                prelude.push_str(&format!("{name}={}\n", quote_value(value)));
                prelude_len += 1;
            }
        }

        let reader = prelude.as_bytes().chain(contents.as_bytes());
        for (index, item) in dotenvy::from_read_iter(reader).enumerate() {
            let (key, value) = item.map_err(|e| ConfigError::from_dotenv(path.clone(), e))?;
            if index >= prelude_len {
                self.vars.insert(key, value);
            }
        }
        debug!(file = %path.display(), "loaded env file");
        self.files.push(path);
        Ok(())
    }

    fn load_if_exists(&mut self, path: PathBuf) -> Result<(), ConfigError> {
        if path.is_file() {
            self.load(path)?;
        }
        Ok(())
    }
}

impl DotenvLoader {
    /// Create a loader for the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `.env` files from `dir` instead of the working directory.
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = Some(dir.into());
        self
    }

    /// Use `base` instead of the process environment (primarily for testing).
    pub fn with_base(mut self, base: EnvStore) -> Self {
        self.base = Some(base);
        self
    }

    /// Check if dotenv loading is disabled in the base snapshot.
    fn dotenv_disabled(base: &EnvStore) -> bool {
        matches!(base.get(DOTENV_DISABLED), Some("true") | Some("1"))
    }

    /// Load the environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if an applicable `.env` file exists but cannot be read
    /// (`ConfigError::DotenvIo`) or has invalid syntax (`ConfigError::DotenvParse`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load(&self) -> Result<LoadedEnv, ConfigError> {
        let mut env = self.base.clone().unwrap_or_else(EnvStore::from_process);

        if Self::dotenv_disabled(&env) {
            debug!("dotenv loading disabled");
            return Ok(LoadedEnv {
                env,
                loaded_files: Vec::new(),
            });
        }
        if env.contains(APP_ENV) {
            debug!("APP_ENV already set; skipping env files");
            return Ok(LoadedEnv {
                env,
                loaded_files: Vec::new(),
            });
        }

        let root = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| ConfigError::DotenvIo {
                file: PathBuf::from("."),
                kind: e.kind(),
            })?,
        };
        let (vars, loaded_files) = {
            let overlay = Self::read_files(&root, &env)?;
            (overlay.vars, overlay.files)
        };

        env.merge_missing(vars);
        Ok(LoadedEnv { env, loaded_files })
    }

    fn read_files<'a>(root: &Path, base: &'a EnvStore) -> Result<Overlay<'a>, ConfigError> {
        let mut overlay = Overlay::new(base);
        let dotenv = root.join(".env");
        let dist = root.join(".env.dist");
        let dev_only = root.join(".env.dev");

        if dotenv.is_file() || dist.is_file() {
            Self::read_cascade(&mut overlay, &dotenv, &dist)?;
        } else if dev_only.is_file() {
            overlay.load(dev_only)?;
            overlay
                .vars
                .insert(APP_ENV.to_string(), DEFAULT_APP_ENV.to_string());
        }
        Ok(overlay)
    }

    /// `.env` (or `.env.dist`), then `.env.local`, `.env.<env>`, `.env.<env>.local`.
    fn read_cascade(overlay: &mut Overlay<'_>, dotenv: &Path, dist: &Path) -> Result<(), ConfigError> {
        if dotenv.is_file() {
            overlay.load(dotenv.to_path_buf())?;
        } else {
            overlay.load(dist.to_path_buf())?;
        }

        let mut app_env = overlay
            .vars
            .entry(APP_ENV.to_string())
            .or_insert_with(|| DEFAULT_APP_ENV.to_string())
            .clone();

        if app_env != TEST_APP_ENV {
            overlay.load_if_exists(with_suffix(dotenv, "local"))?;
            if let Some(value) = overlay.vars.get(APP_ENV) {
                app_env = value.clone();
            }
        }
        if app_env == "local" {
            return Ok(());
        }

        overlay.load_if_exists(with_suffix(dotenv, &app_env))?;
        overlay.load_if_exists(with_suffix(dotenv, &format!("{app_env}.local")))?;
        Ok(())
    }
}

/// `.env` + `suffix` -> `.env.<suffix>`.
fn with_suffix(dotenv: &Path, suffix: &str) -> PathBuf {
    let mut name = dotenv.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Names referenced as `${NAME}` or `$NAME` anywhere in `contents`.
///
/// `$NAME` stops at the first non-alphanumeric character, as dotenvy does.
fn referenced_names(contents: &str) -> BTreeSet<&str> {
    let mut names = BTreeSet::new();
    let mut rest = contents;
    while let Some(pos) = rest.find('$') {
        rest = &rest[pos + 1..];
        let name = match rest.strip_prefix('{') {
            Some(block) => block.find('}').map(|end| &block[..end]),
            None => {
                let end = rest
                    .find(|c: char| !c.is_alphanumeric())
                    .unwrap_or(rest.len());
                Some(&rest[..end])
            }
        };
        if let Some(name) = name.filter(|name| is_dotenv_key(name)) {
            names.insert(name);
        }
    }
    names
}

/// Keys dotenvy accepts on the left of `=`.
fn is_dotenv_key(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Double-quote `value` so dotenvy reads it back unchanged.
fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' | '"' | '$' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_names() {
        let names = referenced_names("A=${DB_HOST}\nB=$PORT/x\nC='${BAD NAME}'\nD=$\n");

        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["DB_HOST", "PORT"]);
    }

    #[test]
    fn test_quoted_value_reads_back_unchanged() {
        let raw = "p\"a$$w\\o'rd\n#x";
        let line = format!("K={}\n", quote_value(raw));

        let parsed: Vec<(String, String)> = dotenvy::from_read_iter(line.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(parsed, vec![("K".to_string(), raw.to_string())]);
    }
}
