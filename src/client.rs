//! `NowClient` - entry point wiring configuration, token and transport

use std::sync::Arc;

use crate::application::{ApiClient, Deployments};
use crate::config::{self, ClientConfig};
use crate::domain::ports::Transport;
use crate::domain::value_objects::ApiToken;
use crate::error::NowResult;
use crate::infrastructure::{resolve_token, HttpTransport};

/// Client for one account of the deployment API
///
/// Cheap to clone; clones share the same transport.
pub struct NowClient<T = HttpTransport> {
    api: Arc<ApiClient<T>>,
}

impl NowClient<HttpTransport> {
    /// Client over HTTPS with an explicit token
    pub fn new(config: &ClientConfig, token: ApiToken) -> NowResult<Self> {
        let transport = HttpTransport::new(&config.api, token)?;
        Ok(Self::with_transport(transport, config))
    }

    /// Load `NOW_*` overrides and resolve the token from the environment,
    /// prompting on the terminal if it is unset.
    pub fn from_env() -> NowResult<Self> {
        let config = config::load();
        let token = resolve_token(&config.api)?;
        Self::new(&config, token)
    }
}

impl<T: Transport> NowClient<T> {
    /// Client over any transport
    pub fn with_transport(transport: T, config: &ClientConfig) -> Self {
        Self {
            api: Arc::new(ApiClient::new(transport, config.deploy.clone())),
        }
    }

    /// Live view of all deployments
    pub fn deployments(&self) -> Deployments<T> {
        Deployments::new(Arc::clone(&self.api))
    }

    /// Endpoint-level access returning raw payloads
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }
}

impl<T> Clone for NowClient<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}
