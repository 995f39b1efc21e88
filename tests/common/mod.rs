//! Common test utilities for client contract and scenario tests.
//!
//! This module provides:
//! - `memory_client`: a `NowClient` over the in-memory API
//! - `SiteBuilder`: temp folders to package and deploy
//! - Fixtures: reusable file contents

#![allow(dead_code)]

pub mod fixtures;
pub mod site;

pub use fixtures::*;
pub use site::*;

use now_client::{ClientConfig, ManifestConflict, MemoryTransport, NowClient};

/// Client over a fresh in-memory API with default configuration
pub fn memory_client() -> NowClient<MemoryTransport> {
    NowClient::with_transport(MemoryTransport::new(), &ClientConfig::default())
}

/// Client over a fresh in-memory API with the given manifest conflict policy
pub fn memory_client_with(conflict: ManifestConflict) -> NowClient<MemoryTransport> {
    let config = ClientConfig::default().with_manifest_conflict(conflict);
    NowClient::with_transport(MemoryTransport::new(), &config)
}
