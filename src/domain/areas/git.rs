use std::path::Path;
use std::process::{Command, Stdio};

const GIT_PROGRAM: &str = "git";

/// A version-control tool queried as an opaque black box.
pub trait VersionControl {
    /// Runs one query and returns its stdout, or `None` when the tool could
    /// not be spawned, exited non-zero, or produced non UTF-8 output.
    fn run(&self, args: &[&str]) -> Option<String>;
}

/// The `git` command-line tool, run inside a working directory.
pub struct GitCli {
    path: Box<Path>,
}

impl GitCli {
    pub fn new(path: &Path) -> Self {
        GitCli {
            path: path.into(),
        }
    }
}

impl VersionControl for GitCli {
    fn run(&self, args: &[&str]) -> Option<String> {
        tracing::debug!(dir = %self.path.display(), ?args, "running git");

        let output = Command::new(GIT_PROGRAM)
            .current_dir(&self.path)
            .args(args)
            // read-only queries must not refresh the index behind our back
            .env("GIT_OPTIONAL_LOCKS", "0")
            .stdin(Stdio::null())
            .output();

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(%err, "failed to spawn git");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git query failed"
            );
            return None;
        }

        String::from_utf8(output.stdout).ok()
    }
}
