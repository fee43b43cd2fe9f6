use crate::domain::areas::host::Host;
use crate::domain::objects::extension_name::ExtensionName;
use std::io::Write;
use std::path::Path;

impl Host {
    /// Installs `source` as an extension. Without an explicit name the
    /// source's file name is used.
    pub fn install(&self, source: &Path, name: Option<&str>) -> anyhow::Result<()> {
        let name = match name {
            Some(name) => name.to_string(),
            None => source
                .file_name()
                .map(|file_name| file_name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let name = ExtensionName::try_parse(name)?;

        self.extensions().install(source, &name)?;

        writeln!(self.writer(), "✓ Extension '{name}' installed successfully!")?;
        writeln!(self.writer(), "  You can now run it with: plz {name}")?;

        Ok(())
    }
}
