//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_map;
mod manifest;
mod token;

pub use file_map::FileMap;
pub use manifest::{
    placeholder_manifest, prepare_manifest, ManifestConflict, CANONICAL_MANIFEST_KEY,
    CONTAINER_BUILD_FILE, MANIFEST_FILE, PLACEHOLDER_PACKAGE,
};
pub use token::ApiToken;
