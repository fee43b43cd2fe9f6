use crate::banner;
use crate::domain::areas::git::VersionControl;
use crate::domain::objects::status_report::StatusReport;
use derive_new::new;
use std::io::Write;

const TITLE: &str = "🔧 Git Status Extension";
const NOT_A_REPOSITORY: &str = "❌ Not a git repository";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    NotARepository,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Reported => 0,
            Outcome::NotARepository => 1,
        }
    }
}

/// Prints branch, remote, short status and upstream divergence of a
/// working tree between two banners.
#[derive(new)]
pub struct StatusReporter<G: VersionControl> {
    git: G,
}

impl<G: VersionControl> StatusReporter<G> {
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<Outcome> {
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{}", banner())?;

        let Some(report) = StatusReport::collect(&self.git) else {
            writeln!(out, "{NOT_A_REPOSITORY}")?;
            return Ok(Outcome::NotARepository);
        };

        write!(out, "{report}")?;
        writeln!(out, "{}", banner())?;

        Ok(Outcome::Reported)
    }
}
