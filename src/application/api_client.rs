//! Raw API client: one method per endpoint.
//!
//! Returns raw JSON payloads. Any non-2xx status becomes
//! `NowError::Transport`; nothing is retried.

use serde_json::Value;

use crate::config::DeployConfig;
use crate::domain::ports::{ApiRequest, ApiResponse, Transport};
use crate::domain::value_objects::{prepare_manifest, FileMap};
use crate::error::{NowError, NowResult};

/// Endpoint-level client over any transport
#[derive(Debug)]
pub struct ApiClient<T> {
    transport: T,
    deploy: DeployConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, deploy: DeployConfig) -> Self {
        Self { transport, deploy }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn deploy_config(&self) -> &DeployConfig {
        &self.deploy
    }

    /// List all deployments (`GET deployments`)
    pub fn list_deployments(&self) -> NowResult<Vec<Value>> {
        let mut body = self.send_json(ApiRequest::get("deployments"))?;
        match body.get_mut("deployments").map(Value::take) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(NowError::invalid_payload(
                "deployment listing",
                "expected a 'deployments' array",
            )),
        }
    }

    /// Full payload of one deployment (`GET deployments/{id}`)
    pub fn get_deployment(&self, id: &str) -> NowResult<Value> {
        self.send_json(ApiRequest::get(format!("deployments/{}", id)))
    }

    /// Create a deployment from a file map (`POST deployments`).
    ///
    /// `package.json` is renamed to `package` and a placeholder manifest is
    /// injected when neither `Dockerfile` nor `package` exists. `name` is
    /// only used for that placeholder.
    pub fn create_deployment(&self, files: FileMap, name: Option<&str>) -> NowResult<Value> {
        let name = name.unwrap_or(self.deploy.default_name.as_str());
        let body = prepare_manifest(files, name, self.deploy.manifest_conflict)?;
        let file_count = body.len();

        let created = self.send_json(ApiRequest::post("deployments", body.into_value()))?;
        let uid = created.get("uid").and_then(Value::as_str).unwrap_or_default();
        tracing::info!(name, files = file_count, uid, "deployment created");
        Ok(created)
    }

    /// Delete a deployment (`DELETE deployments/{id}`)
    pub fn delete_deployment(&self, id: &str) -> NowResult<()> {
        self.send(ApiRequest::delete(format!("deployments/{}", id)))?;
        tracing::info!(uid = id, "deployment deleted");
        Ok(())
    }

    /// File listing of a deployment (`GET deployments/{id}/files`)
    pub fn list_files(&self, deployment_id: &str) -> NowResult<Vec<Value>> {
        match self.send_json(ApiRequest::get(format!("deployments/{}/files", deployment_id)))? {
            Value::Array(items) => Ok(items),
            _ => Err(NowError::invalid_payload("file listing", "expected an array")),
        }
    }

    /// Raw content of one file (`GET deployments/{id}/files/{fileId}`)
    pub fn get_file_content(&self, deployment_id: &str, file_id: &str) -> NowResult<Vec<u8>> {
        let path = format!("deployments/{}/files/{}", deployment_id, file_id);
        Ok(self.send(ApiRequest::get(path))?.body)
    }

    fn send(&self, request: ApiRequest) -> NowResult<ApiResponse> {
        let response = self.transport.execute(&request)?;
        if response.is_success() {
            return Ok(response);
        }

        Err(NowError::Transport {
            status: response.status,
            method: request.method.to_string(),
            path: request.path,
            message: error_message(&response),
        })
    }

    fn send_json(&self, request: ApiRequest) -> NowResult<Value> {
        let response = self.send(request)?;
        if response.body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(response.json()?)
    }
}

/// `error.message` from a JSON error body, else the body text
fn error_message(response: &ApiResponse) -> String {
    response
        .json::<Value>()
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| response.text())
}
