use crate::domain::areas::git::VersionControl;
use crate::domain::objects::divergence::Divergence;

const CLEAN_MESSAGE: &str = "  ✓ Working tree clean";

/// A snapshot of the working tree, gathered fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusReport {
    pub branch: String,
    pub remote: Option<String>,
    pub changes: Vec<String>,
    pub divergence: Option<Divergence>,
}

impl StatusReport {
    /// Queries the working tree. Returns `None` when the directory is not
    /// inside a repository; every other failed query leaves its field empty.
    pub fn collect(git: &impl VersionControl) -> Option<Self> {
        let git_dir = git
            .run(&["rev-parse", "--git-dir"])
            .filter(|output| !output.trim().is_empty())?;
        tracing::debug!(git_dir = git_dir.trim(), "inside a working tree");

        let branch = git
            .run(&["branch", "--show-current"])
            .map(|output| output.trim().to_string())
            .unwrap_or_default();

        let remote = git
            .run(&["remote", "get-url", "origin"])
            .map(|output| output.trim().to_string())
            .filter(|url| !url.is_empty());

        // lines are kept raw, the leading status column is significant
        let changes = git
            .run(&["status", "--short"])
            .map(|output| {
                output
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let range = format!("origin/{branch}...{branch}");
        let divergence = git
            .run(&["rev-list", "--left-right", "--count", &range])
            .and_then(|output| Divergence::parse(&output));

        Some(StatusReport {
            branch,
            remote,
            changes,
            divergence,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}

impl std::fmt::Display for StatusReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch: {}", self.branch)?;

        if let Some(remote) = &self.remote {
            writeln!(f, "Remote: {remote}")?;
        }

        writeln!(f)?;
        writeln!(f, "Status:")?;
        if self.is_clean() {
            writeln!(f, "{CLEAN_MESSAGE}")?;
        } else {
            for line in &self.changes {
                writeln!(f, "{line}")?;
            }
        }

        if let Some(divergence) = self.divergence.filter(Divergence::is_diverged) {
            writeln!(f)?;
            writeln!(
                f,
                "↑ {} ahead, ↓ {} behind origin/{}",
                divergence.ahead, divergence.behind, self.branch
            )?;
        }

        Ok(())
    }
}
