//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk reads.

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Local file system implementation
///
/// Walks every entry below a root: hidden files and ignore files are not
/// filtered. A symlink to a file is listed and read through the link; a
/// symlink to a directory is not descended into.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        std::fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| FsError::Other(e.to_string()))?;
            let is_file = match entry.file_type() {
                Some(t) if t.is_symlink() => entry.path().is_file(),
                Some(t) => t.is_file(),
                None => false,
            };
            if is_file {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}
