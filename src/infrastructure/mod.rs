//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local directory walking and reading
//! - `http` - Blocking HTTPS transport to the deployment API
//! - `memory` - In-process fake of the remote API
//! - `token` - Bearer token resolution

pub mod fs;
pub mod http;
pub mod memory;
pub mod token;

// Re-export for convenience
pub use fs::LocalFs;
pub use http::HttpTransport;
pub use memory::MemoryTransport;
pub use token::resolve_token;
