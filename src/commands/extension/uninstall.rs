use crate::domain::areas::host::Host;
use crate::domain::objects::extension_name::ExtensionName;
use std::io::Write;

impl Host {
    pub fn uninstall(&self, name: &str) -> anyhow::Result<()> {
        let name = ExtensionName::try_parse(name)?;

        self.extensions().uninstall(&name)?;

        writeln!(
            self.writer(),
            "✓ Extension '{name}' uninstalled successfully!"
        )?;

        Ok(())
    }
}
