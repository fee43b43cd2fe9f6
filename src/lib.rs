//! `plz`: an extensible command-line host and the demo extensions shipped with it.
//!
//! - `commands`: the `plz extension` subcommands, extension dispatch, and the
//!   two demo reporters (`git-status`, `rust-extension`)
//! - `domain`: the areas the commands operate on (extensions directory, git
//!   working tree) and the values they produce
//! - `config`, `logging`, `errors`: environment-driven configuration, tracing
//!   setup and the error taxonomy shared by the binaries

pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;

/// Width of the `=` banner framing every report.
pub const BANNER_WIDTH: usize = 50;

pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}
