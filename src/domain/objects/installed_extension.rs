use derive_new::new;
use std::path::PathBuf;

const NAME_COLUMN_WIDTH: usize = 20;

/// An executable regular file found in the extensions directory.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct InstalledExtension {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl std::fmt::Display for InstalledExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "  {:<width$} (executable, {} bytes)",
            self.name,
            self.size,
            width = NAME_COLUMN_WIDTH
        )
    }
}
