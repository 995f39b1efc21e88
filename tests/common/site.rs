//! Temp folders shaped like the sites users deploy.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A folder under a temp directory, removed on drop
pub struct TestSite {
    _root: TempDir,
    path: PathBuf,
}

impl TestSite {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builder for `TestSite`
pub struct SiteBuilder {
    name: String,
    files: Vec<(String, String)>,
}

impl SiteBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            files: Vec::new(),
        }
    }

    pub fn file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestSite {
        let root = TempDir::new().unwrap();
        let path = root.path().join(&self.name);
        fs::create_dir_all(&path).unwrap();

        for (relative, content) in &self.files {
            let file = path.join(relative);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(file, content).unwrap();
        }

        TestSite { _root: root, path }
    }
}
