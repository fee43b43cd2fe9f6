/// Commit counts between a branch and `origin/<branch>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Divergence {
    pub ahead: usize,
    pub behind: usize,
}

impl Divergence {
    /// Parses the output of `git rev-list --left-right --count origin/<b>...<b>`,
    /// which lists the remote-only (behind) count first and the local-only
    /// (ahead) count second.
    pub fn parse(output: &str) -> Option<Self> {
        let mut counts = output.split_whitespace();

        let behind = counts.next()?.parse().ok()?;
        let ahead = counts.next()?.parse().ok()?;

        match counts.next() {
            Some(_) => None,
            None => Some(Divergence { ahead, behind }),
        }
    }

    pub fn is_diverged(&self) -> bool {
        self.ahead != 0 || self.behind != 0
    }
}
