use crate::domain::areas::host::Host;
use std::io::Write;

impl Host {
    pub fn list(&self) -> anyhow::Result<()> {
        let extensions = self.extensions().list()?;

        if extensions.is_empty() {
            writeln!(self.writer(), "No extensions installed.")?;
            writeln!(self.writer())?;
            writeln!(self.writer(), "To install an extension, use:")?;
            writeln!(
                self.writer(),
                "  plz extension install <source-path> [name]"
            )?;
            return Ok(());
        }

        writeln!(self.writer(), "Installed extensions:")?;
        for extension in &extensions {
            writeln!(self.writer(), "{extension}")?;
        }

        writeln!(self.writer())?;
        writeln!(
            self.writer(),
            "Run an extension with: plz <extension-name> [args...]"
        )?;

        Ok(())
    }
}
