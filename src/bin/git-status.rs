use clap::Parser;
use plz::commands::reporters::status::StatusReporter;
use plz::domain::areas::git::GitCli;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "git-status",
    version = "0.1.0",
    about = "Shows git repository status",
    long_about = "A plz extension printing the current branch, the origin remote, \
    the short working tree status and how far the branch diverged from origin."
)]
struct Cli {
    #[arg(index = 1, default_value = ".", help = "Directory to inspect")]
    dir: PathBuf,
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
    let reporter = StatusReporter::new(GitCli::new(&cli.dir));

    let mut stdout = std::io::stdout().lock();
    let outcome = reporter.run(&mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::from(outcome.exit_code()))
}
