//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ManifestConflict;

/// Base endpoint of the deployment API
pub const DEFAULT_ENDPOINT: &str = "https://api.zeit.co/now";

/// Environment variable holding the bearer token
pub const DEFAULT_TOKEN_VAR: &str = "ZEIT_API_TOKEN";

/// Request timeout applied by the HTTP client
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name used in the placeholder manifest when the caller gives none
pub const DEFAULT_DEPLOYMENT_NAME: &str = "pythonista-deployment";

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_token_var")]
    pub token_var: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            token_var: default_token_var(),
        }
    }
}

/// Deployment creation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_deployment_name")]
    pub default_name: String,

    #[serde(default)]
    pub manifest_conflict: ManifestConflict,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            default_name: default_deployment_name(),
            manifest_conflict: ManifestConflict::default(),
        }
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub deploy: DeployConfig,
}

impl ClientConfig {
    /// Same configuration against a different endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api.endpoint = endpoint.into();
        self
    }

    pub fn with_manifest_conflict(mut self, conflict: ManifestConflict) -> Self {
        self.deploy.manifest_conflict = conflict;
        self
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_token_var() -> String {
    DEFAULT_TOKEN_VAR.to_string()
}

fn default_deployment_name() -> String {
    DEFAULT_DEPLOYMENT_NAME.to_string()
}
