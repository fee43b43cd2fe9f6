use plz::commands::reporters::environment::EnvironmentReporter;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    plz::logging::init();

    // every argument is echoed back, flags included, so there is nothing to parse
    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>();

    match run(EnvironmentReporter::new(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            plz::errors::report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(reporter: EnvironmentReporter) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    reporter.run(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}
