//! Folder packaging: a local directory tree becomes a `FileMap`.

use std::path::{Component, Path};

use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::FileMap;
use crate::error::{NowError, NowResult};
use crate::infrastructure::LocalFs;

/// Reads every regular file under a root into a file map
///
/// Keys are paths relative to the root joined with `/`; values are the
/// file contents read as text. Non-text files fail the whole pack.
#[derive(Debug, Clone, Default)]
pub struct FolderPackager<F = LocalFs> {
    fs: F,
}

impl FolderPackager<LocalFs> {
    /// Packager over the local disk
    pub fn local() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<F: FileSystem> FolderPackager<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn pack(&self, root: &Path) -> NowResult<FileMap> {
        if !self.fs.is_dir(root) {
            return Err(NowError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut files = FileMap::new();
        for path in self.fs.list_files(root)? {
            let relative = path.strip_prefix(root).map_err(|_| {
                FsError::Other(format!(
                    "{} is outside {}",
                    path.display(),
                    root.display()
                ))
            })?;
            let content = self.fs.read(&path)?;
            files.insert_text(relative_key(relative)?, content);
        }

        tracing::debug!(root = %root.display(), files = files.len(), "packed folder");
        Ok(files)
    }
}

/// Forward-slash key for a path relative to the packaging root
fn relative_key(relative: &Path) -> NowResult<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| NowError::NonUtf8Path {
                path: relative.to_path_buf(),
            })?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

/// Default deployment name for a folder: its base name
pub(crate) fn folder_name(path: &Path) -> Option<String> {
    let name = match path.file_name() {
        Some(name) => name.to_os_string(),
        None => path.canonicalize().ok()?.file_name()?.to_os_string(),
    };
    name.into_string().ok()
}
