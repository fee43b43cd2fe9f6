use crate::domain::areas::host::Host;
use crate::domain::objects::extension_name::ExtensionName;
use crate::errors::PlzError;
use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

impl Host {
    /// Runs `args[0]` as an installed extension with the remaining arguments
    /// and returns its exit code. The extension shares this process's stdio.
    pub fn dispatch(&self, args: &[String]) -> anyhow::Result<i32> {
        let Some((command, extension_args)) = args.split_first() else {
            anyhow::bail!("no command given");
        };

        let path = ExtensionName::try_parse(command.as_str())
            .and_then(|name| self.extensions().find(&name))
            .map_err(|_| PlzError::UnknownCommand(command.clone()))?;

        // anything buffered so far must reach the terminal before the child writes
        self.writer().flush()?;

        tracing::debug!(extension = %path.display(), args = ?extension_args, "dispatching");
        let status = Command::new(&path)
            .args(extension_args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(PlzError::ExecuteExtension)?;
        tracing::debug!(%status, "extension finished");

        Ok(exit_code(status))
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
