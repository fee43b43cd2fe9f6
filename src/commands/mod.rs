//! Command implementations
//!
//! - `extension`: the host side, managing the extensions directory and
//!   dispatching unknown subcommands to installed extensions
//! - `reporters`: the demo extensions shipped as their own binaries
//!
//! Host commands are `impl Host` blocks, one file per command; reporters are
//! standalone types writing to any `std::io::Write`.

pub mod extension;
pub mod reporters;
