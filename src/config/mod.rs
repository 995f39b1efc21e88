//! Configuration module
//!
//! There is no config file. Configuration is resolved as:
//! 1. Values set on `ClientConfig` by the caller (highest priority)
//! 2. Environment variables (NOW_*), applied by `with_env_overrides`
//! 3. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{load, with_env_overrides, with_overrides_from};
pub use types::{
    ApiConfig, ClientConfig, DeployConfig, DEFAULT_DEPLOYMENT_NAME, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_VAR,
};
