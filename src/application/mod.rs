//! Application Layer
//!
//! Maps the object-style API onto transport calls.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT parse payloads itself (the entities do)
//! - Owns no state beyond a shared `ApiClient`
//!
//! ## Components
//!
//! - `ApiClient` - one method per API endpoint, status checking, manifest rules
//! - `FolderPackager` - turns a local directory into a `FileMap`
//! - `Deployments` - read-through collection keyed by deployment id
//! - `Files` - file listing of one deployment, keyed by id or name

pub mod api_client;
pub mod deployments;
pub mod files;
pub mod packager;

pub use api_client::ApiClient;
pub use deployments::{Deployment, Deployments};
pub use files::{File, FileHandle, Files};
pub use packager::FolderPackager;
