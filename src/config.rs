//! Environment-driven configuration.
//!
//! `plz` has no configuration file. Everything it needs to know comes from
//! the process environment:
//!
//! - `PLZ_EXTENSIONS_DIR`: where extensions are installed; defaults to
//!   `~/.plz/extensions` (or `./.plz/extensions` when no home directory is known)
//! - `PLZ_LOG`: a `tracing` filter directive, `warn` when unset

use std::ffi::OsString;
use std::path::PathBuf;

pub const EXTENSIONS_DIR_ENV: &str = "PLZ_EXTENSIONS_DIR";
pub const LOG_ENV: &str = "PLZ_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

const PLZ_DIR: &str = ".plz";
const EXTENSIONS_DIR: &str = "extensions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub extensions_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(EXTENSIONS_DIR_ENV), dirs::home_dir())
    }

    fn resolve(extensions_dir: Option<OsString>, home_dir: Option<PathBuf>) -> Self {
        let extensions_dir = match extensions_dir.filter(|dir| !dir.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => home_dir
                .unwrap_or_else(|| PathBuf::from("."))
                .join(PLZ_DIR)
                .join(EXTENSIONS_DIR),
        };

        Config { extensions_dir }
    }
}
