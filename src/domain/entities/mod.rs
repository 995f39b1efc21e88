//! Domain Entities
//!
//! Immutable records parsed from API payloads at the system boundary.
//! - `DeploymentRecord` - one deployment from the listing
//! - `FileEntry` - one file inside a deployment, without its content

mod deployment;
mod file_entry;

pub use deployment::DeploymentRecord;
pub use file_entry::{FileEntry, FileKind};
