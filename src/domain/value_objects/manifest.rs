//! Manifest rules for deployment creation
//!
//! The API builds a deployment from its `package` entry unless a
//! `Dockerfile` is present. A `package.json` file is moved to `package`;
//! when neither build input exists a placeholder manifest is injected so a
//! plain folder deploys as a static site.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::FileMap;
use crate::error::{NowError, NowResult};

/// Container build file; its presence disables manifest injection
pub const CONTAINER_BUILD_FILE: &str = "Dockerfile";

/// Manifest filename as it appears in a folder
pub const MANIFEST_FILE: &str = "package.json";

/// Key under which the API expects the manifest
pub const CANONICAL_MANIFEST_KEY: &str = "package";

/// Package that serves the deployment's directory when no manifest exists
pub const PLACEHOLDER_PACKAGE: &str = "list";

/// What to do when a file map holds both `package.json` and `package`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ManifestConflict {
    /// Fail with `NowError::AmbiguousInput` (default)
    #[default]
    Reject,
    /// `package.json` replaces the existing entry, with a warning
    Overwrite,
}

impl ManifestConflict {
    pub const VALID_VALUES: &'static [&'static str] = &["reject", "overwrite"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "overwrite" => Some(Self::Overwrite),
            _ => None,
        }
    }
}

/// The manifest injected into folders that have no build metadata
pub fn placeholder_manifest(name: &str) -> Value {
    json!({
        "name": name,
        "dependencies": { PLACEHOLDER_PACKAGE: "latest" },
        "scripts": { "start": format!("{} .", PLACEHOLDER_PACKAGE) },
    })
}

/// Apply the rename and injection rules to a creation body.
///
/// Only the manifest keys are touched; every other entry passes through.
/// Under the default `Reject` policy a map holding both `package.json` and
/// `package` is refused with `AmbiguousInput` instead of renamed.
pub fn prepare_manifest(
    mut files: FileMap,
    name: &str,
    conflict: ManifestConflict,
) -> NowResult<FileMap> {
    if let Some(manifest) = files.remove(MANIFEST_FILE) {
        if files.contains_key(CANONICAL_MANIFEST_KEY) {
            match conflict {
                ManifestConflict::Reject => {
                    return Err(NowError::AmbiguousInput {
                        message: format!(
                            "file map contains both '{}' and '{}'; renaming would discard '{}'",
                            MANIFEST_FILE, CANONICAL_MANIFEST_KEY, CANONICAL_MANIFEST_KEY
                        ),
                    });
                }
                ManifestConflict::Overwrite => {
                    tracing::warn!(
                        "'{}' replaces existing '{}' entry",
                        MANIFEST_FILE,
                        CANONICAL_MANIFEST_KEY
                    );
                }
            }
        }
        files.insert(CANONICAL_MANIFEST_KEY, manifest);
    }

    if !files.contains_key(CONTAINER_BUILD_FILE) && !files.contains_key(CANONICAL_MANIFEST_KEY) {
        files.insert(CANONICAL_MANIFEST_KEY, placeholder_manifest(name));
    }

    Ok(files)
}
