use clap::{Parser, Subcommand};
use plz::config::Config;
use plz::domain::areas::host::Host;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "plz",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "An extensible CLI tool",
    long_about = "plz is a super CLI app that can be extended with external executable files. \
    Extensions can be written in any language as long as they are executable.",
    arg_required_else_help = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "extension",
        visible_alias = "ext",
        about = "Manage plz extensions",
        long_about = "Install, uninstall, and list plz extensions."
    )]
    Extension {
        #[command(subcommand)]
        command: ExtensionCommands,
    },
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Subcommand)]
enum ExtensionCommands {
    #[command(
        name = "install",
        about = "Install a new extension",
        long_about = "Install a new extension from an executable file. \
        The extension can be written in any language as long as it's executable."
    )]
    Install {
        #[arg(index = 1, help = "The executable file to install")]
        source_path: PathBuf,
        #[arg(index = 2, help = "The extension name, defaults to the file name")]
        name: Option<String>,
    },
    #[command(
        name = "uninstall",
        about = "Uninstall an extension",
        long_about = "Remove an installed extension from the system."
    )]
    Uninstall {
        #[arg(index = 1, help = "The extension to remove")]
        name: String,
    },
    #[command(
        name = "list",
        about = "List installed extensions",
        long_about = "Display all installed extensions."
    )]
    List,
}

fn main() -> ExitCode {
    plz::logging::init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            plz::errors::report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::from_env();
    tracing::debug!(extensions_dir = %config.extensions_dir.display(), "resolved configuration");

    let host = Host::new(&config, Box::new(std::io::stdout()));

    match &cli.command {
        Commands::Extension { command } => match command {
            ExtensionCommands::Install { source_path, name } => {
                host.install(source_path, name.as_deref())?
            }
            ExtensionCommands::Uninstall { name } => host.uninstall(name)?,
            ExtensionCommands::List => host.list()?,
        },
        Commands::External(args) => {
            let code = host.dispatch(args)?;
            return Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)));
        }
    }

    Ok(ExitCode::SUCCESS)
}
