use colored::Colorize;
use is_terminal::IsTerminal;
use std::io;

/// Failures of the extension host surfaced to the user as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum PlzError {
    #[error("extension name cannot be empty")]
    EmptyExtensionName,

    #[error("extension name cannot contain path separators")]
    PathSeparatorInName,

    #[error("invalid extension name")]
    InvalidExtensionName,

    #[error("extension '{0}' not found")]
    ExtensionNotFound(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("source file not found: {0}")]
    SourceNotFound(#[source] io::Error),

    #[error("source path is a directory, not a file")]
    SourceIsDirectory,

    #[error("failed to read source file: {0}")]
    ReadSource(#[source] io::Error),

    #[error("failed to create extensions directory: {0}")]
    CreateExtensionsDir(#[source] io::Error),

    #[error("failed to read extensions directory: {0}")]
    ReadExtensionsDir(#[source] io::Error),

    #[error("failed to write extension: {0}")]
    WriteExtension(#[source] io::Error),

    #[error("failed to remove extension: {0}")]
    RemoveExtension(#[source] io::Error),

    #[error("failed to execute extension: {0}")]
    ExecuteExtension(#[source] io::Error),
}

/// Prints `error: <message>` on stderr, coloring the prefix only for terminals.
pub fn report(err: &anyhow::Error) {
    colored::control::set_override(io::stderr().is_terminal());
    eprintln!("{} {err}", "error:".red().bold());
}
