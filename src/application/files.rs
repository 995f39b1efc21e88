//! Files of one deployment.
//!
//! A deployment's files never change, so the listing is fetched once when
//! `Files` is built. Content is fetched per file, only when asked for.

use std::fmt;
use std::sync::Arc;

use super::api_client::ApiClient;
use crate::domain::entities::{FileEntry, FileKind};
use crate::domain::ports::Transport;
use crate::error::{NowError, NowResult, ResourceKind};

/// File listing of one deployment, keyed by file id or name
pub struct Files<T> {
    deployment_id: String,
    entries: Vec<FileEntry>,
    client: Arc<ApiClient<T>>,
}

impl<T: Transport> Files<T> {
    /// Fetch the listing for `deployment_id`
    pub fn fetch(client: Arc<ApiClient<T>>, deployment_id: &str) -> NowResult<Self> {
        let entries = client
            .list_files(deployment_id)?
            .iter()
            .map(|payload| FileEntry::from_payload(deployment_id, payload))
            .collect::<NowResult<Vec<_>>>()?;

        Ok(Self {
            deployment_id: deployment_id.to_string(),
            entries,
            client,
        })
    }

    pub fn deployment_id(&self) -> &str {
        &self.deployment_id
    }

    /// Look up a file by id, falling back to its name
    pub fn get(&self, id_or_name: &str) -> NowResult<FileHandle<T>> {
        self.entries
            .iter()
            .find(|e| e.id() == id_or_name)
            .or_else(|| self.entries.iter().find(|e| e.name() == id_or_name))
            .map(|entry| FileHandle {
                entry: entry.clone(),
                client: Arc::clone(&self.client),
            })
            .ok_or_else(|| NowError::not_found(ResourceKind::File, id_or_name))
    }

    pub fn contains(&self, id_or_name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.id() == id_or_name || e.name() == id_or_name)
    }

    /// File ids in listing order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FileEntry::id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(FileEntry::name)
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> fmt::Debug for Files<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Files")
            .field("deployment_id", &self.deployment_id)
            .field("entries", &self.entries)
            .finish()
    }
}

/// A listed file whose content has not been fetched
pub struct FileHandle<T> {
    entry: FileEntry,
    client: Arc<ApiClient<T>>,
}

impl<T: Transport> FileHandle<T> {
    pub fn entry(&self) -> &FileEntry {
        &self.entry
    }

    pub fn id(&self) -> &str {
        self.entry.id()
    }

    pub fn name(&self) -> &str {
        self.entry.name()
    }

    pub fn kind(&self) -> &FileKind {
        self.entry.kind()
    }

    /// Download the file's content
    pub fn fetch_content(&self) -> NowResult<Vec<u8>> {
        self.client
            .get_file_content(self.entry.deployment_id(), self.entry.id())
    }

    /// Download the content and return the complete file
    pub fn materialize(self) -> NowResult<File> {
        let content = self.fetch_content()?;
        Ok(File {
            entry: self.entry,
            content,
        })
    }
}

impl<T> PartialEq for FileHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

impl<T> fmt::Debug for FileHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileHandle").field(&self.entry).finish()
    }
}

/// A file with its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    entry: FileEntry,
    content: Vec<u8>,
}

impl File {
    pub fn entry(&self) -> &FileEntry {
        &self.entry
    }

    pub fn id(&self) -> &str {
        self.entry.id()
    }

    pub fn name(&self) -> &str {
        self.entry.name()
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content as UTF-8 text, if it is valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}
