//! now-client - client library for the now.sh deployment API
//!
//! Deployments are exposed as a live collection: every read goes to the
//! API, so what you see is what the service currently has. Files of a
//! deployment are listed once and their content is fetched on demand.
//!
//! ```no_run
//! use std::path::Path;
//! use now_client::NowClient;
//!
//! # fn main() -> Result<(), now_client::NowError> {
//! let client = NowClient::from_env()?;
//! let deployments = client.deployments();
//!
//! let site = deployments.create_from_folder(Path::new("./site"))?;
//! println!("{} -> https://{}", site.name(), site.url());
//!
//! let index = site.files()?.get("index.html")?.materialize()?;
//! println!("{}", index.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    ApiClient, Deployment, Deployments, File, FileHandle, Files, FolderPackager,
};
pub use client::NowClient;
pub use config::ClientConfig;
pub use domain::entities::{DeploymentRecord, FileEntry, FileKind};
pub use domain::ports::{ApiRequest, ApiResponse, Method, Transport};
pub use domain::value_objects::{ApiToken, FileMap, ManifestConflict};
pub use error::{NowError, NowResult, ResourceKind};
pub use infrastructure::{HttpTransport, LocalFs, MemoryTransport};
