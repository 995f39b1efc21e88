//! In-memory file system for testing

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mock file system holding files by absolute path
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    pub files: BTreeMap<PathBuf, String>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files.keys().any(|f| f != path && f.starts_with(path))
    }

    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|f| f.starts_with(root) && f.as_path() != root)
            .cloned()
            .collect())
    }
}
