use crate::domain::objects::extension_name::ExtensionName;
use crate::domain::objects::installed_extension::InstalledExtension;
use crate::errors::PlzError;
use file_guard::Lock;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
const EXTENSION_MODE: u32 = 0o755;

/// The directory holding installed extensions, one executable file each.
pub struct Extensions {
    path: Box<Path>,
}

impl Extensions {
    pub fn new(path: Box<Path>) -> Self {
        Extensions { path }
    }

    pub fn extension_path(&self, name: &ExtensionName) -> PathBuf {
        self.path.join(name.as_ref())
    }

    /// Executable regular files, sorted by name. A missing directory holds
    /// no extensions.
    pub fn list(&self) -> anyhow::Result<Vec<InstalledExtension>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.path).map_err(PlzError::ReadExtensionsDir)?;

        let mut extensions = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                // follows symlinks, so a link to an executable counts
                let metadata = std::fs::metadata(&path).ok()?;

                if metadata.is_file() && is_executable::is_executable(&path) {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    Some(InstalledExtension::new(name, path, metadata.len()))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        extensions.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(extensions)
    }

    /// Copies `source` into the directory as `name`, marked executable.
    /// An existing extension with the same name is replaced.
    pub fn install(&self, source: &Path, name: &ExtensionName) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.path).map_err(PlzError::CreateExtensionsDir)?;

        let source_metadata = std::fs::metadata(source).map_err(PlzError::SourceNotFound)?;
        if source_metadata.is_dir() {
            return Err(PlzError::SourceIsDirectory.into());
        }

        let data = std::fs::read(source).map_err(PlzError::ReadSource)?;

        let target = self.extension_path(name);
        Self::write_executable(&target, &data).map_err(PlzError::WriteExtension)?;
        tracing::debug!(
            source = %source.display(),
            target = %target.display(),
            bytes = data.len(),
            "installed extension"
        );

        Ok(target)
    }

    pub fn uninstall(&self, name: &ExtensionName) -> anyhow::Result<PathBuf> {
        let target = self.find(name)?;

        std::fs::remove_file(&target).map_err(PlzError::RemoveExtension)?;
        tracing::debug!(target = %target.display(), "removed extension");

        Ok(target)
    }

    /// Path of an installed extension; any existing entry counts, executable
    /// or not, so that running it reports a meaningful spawn error.
    pub fn find(&self, name: &ExtensionName) -> anyhow::Result<PathBuf> {
        let target = self.extension_path(name);

        if target.symlink_metadata().is_ok() {
            Ok(target)
        } else {
            Err(PlzError::ExtensionNotFound(name.to_string()).into())
        }
    }

    pub fn is_extension(&self, name: &ExtensionName) -> bool {
        let target = self.extension_path(name);
        target.is_file() && is_executable::is_executable(&target)
    }

    fn write_executable(target: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(EXTENSION_MODE);
        }

        let mut file = options.open(target)?;
        {
            let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)?;
            lock.write_all(data)?;
        }

        // the mode passed to open only applies to newly created files
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(EXTENSION_MODE))?;
        }

        Ok(())
    }
}
