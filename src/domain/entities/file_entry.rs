//! FileEntry entity - a file inside a deployment, without content

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::error::{NowError, NowResult};

/// Kind tag reported by the files endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileKind {
    File,
    Directory,
    Symlink,
    Other(String),
}

impl FileKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "file" => FileKind::File,
            "directory" => FileKind::Directory,
            "symlink" => FileKind::Symlink,
            other => FileKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileKind::File => "file",
            FileKind::Directory => "directory",
            FileKind::Symlink => "symlink",
            FileKind::Other(tag) => tag,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct RawFile {
    uid: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

/// One entry of a deployment's file listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    id: String,
    name: String,
    kind: FileKind,
    deployment_id: String,
}

impl FileEntry {
    /// Parse a raw file payload belonging to `deployment_id`
    pub fn from_payload(deployment_id: &str, payload: &Value) -> NowResult<Self> {
        let raw = RawFile::deserialize(payload).map_err(|e| NowError::invalid_payload("file", e))?;
        Ok(Self {
            id: raw.uid,
            name: raw.name,
            kind: FileKind::parse(&raw.kind),
            deployment_id: deployment_id.to_string(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Path of the file within its deployment
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FileKind {
        &self.kind
    }

    pub fn deployment_id(&self) -> &str {
        &self.deployment_id
    }
}
