use crate::banner;
use crate::domain::objects::argument_list::ArgumentList;
use chrono::NaiveDateTime;
use std::io::Write;

/// `rustc --version` of the compiler that built this binary, recorded by the
/// build script.
pub const TOOLCHAIN_VERSION: &str = env!("PLZ_RUSTC_VERSION");

const TITLE: &str = "🦀 Rust Extension Demo";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const UNKNOWN_VERSION: &str = "unknown";

/// Prints the time, toolchain version and received arguments.
pub struct EnvironmentReporter {
    arguments: ArgumentList,
    version: String,
}

impl EnvironmentReporter {
    pub fn new(arguments: Vec<String>) -> Self {
        Self::with_toolchain(arguments, TOOLCHAIN_VERSION)
    }

    pub fn with_toolchain(arguments: Vec<String>, toolchain: &str) -> Self {
        EnvironmentReporter {
            arguments: ArgumentList::new(arguments),
            version: version_token(toolchain).to_string(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        self.write_report(out, chrono::Local::now().naive_local())
    }

    pub fn write_report(&self, out: &mut impl Write, now: NaiveDateTime) -> anyhow::Result<()> {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{}", banner())?;
        writeln!(out, "Current time: {}", now.format(TIMESTAMP_FORMAT))?;
        writeln!(out, "Rust version: {}", self.version)?;
        writeln!(out, "Arguments passed: {}", self.arguments)?;
        writeln!(out, "{}", banner())?;
        writeln!(out)?;
        writeln!(out, "This extension is written in Rust!")?;
        writeln!(out, "Extensions can be in ANY language! 🚀")?;

        Ok(())
    }
}

/// The bare version number out of a `rustc --version` line, e.g. `1.93.0`
/// from `rustc 1.93.0 (254b59607 2026-01-19)`.
pub fn version_token(toolchain: &str) -> &str {
    let mut tokens = toolchain.split_whitespace();

    match tokens.next() {
        Some("rustc") => tokens.next().unwrap_or(UNKNOWN_VERSION),
        Some(token) => token,
        None => UNKNOWN_VERSION,
    }
}
