//! Read-through deployment collection.
//!
//! `Deployments` holds no data: every read lists deployments from the API
//! again, so results always reflect the remote state. `snapshot` is the
//! single-request alternative when many lookups are needed.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Local};
use serde_json::Value;

use super::api_client::ApiClient;
use super::files::Files;
use super::packager::{folder_name, FolderPackager};
use crate::domain::entities::DeploymentRecord;
use crate::domain::ports::{FileSystem, Transport};
use crate::domain::value_objects::FileMap;
use crate::error::{NowError, NowResult, ResourceKind};

/// All deployments of the account, keyed by id
pub struct Deployments<T> {
    client: Arc<ApiClient<T>>,
}

impl<T> Clone for Deployments<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport> Deployments<T> {
    pub fn new(client: Arc<ApiClient<T>>) -> Self {
        Self { client }
    }

    /// Every deployment, in listing order (one request)
    pub fn list(&self) -> NowResult<Vec<Deployment<T>>> {
        self.client
            .list_deployments()?
            .iter()
            .map(|payload| self.wrap(payload))
            .collect()
    }

    /// Deployment with `id` from a fresh listing
    pub fn get(&self, id: &str) -> NowResult<Deployment<T>> {
        self.list()?
            .into_iter()
            .find(|d| d.id() == id)
            .ok_or_else(|| NowError::not_found(ResourceKind::Deployment, id))
    }

    /// Deployment with `id` from `GET deployments/{id}`, without listing.
    ///
    /// An unknown id fails with the API's 404 as `NowError::Transport`.
    pub fn fetch(&self, id: &str) -> NowResult<Deployment<T>> {
        self.wrap(&self.client.get_deployment(id)?)
    }

    /// Deployment ids, in listing order
    pub fn ids(&self) -> NowResult<Vec<String>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|d| d.record.id().to_string())
            .collect())
    }

    pub fn len(&self) -> NowResult<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> NowResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, id: &str) -> NowResult<bool> {
        Ok(self.list()?.iter().any(|d| d.id() == id))
    }

    /// The current listing as an id map, in one request
    pub fn snapshot(&self) -> NowResult<BTreeMap<String, Deployment<T>>> {
        Ok(self
            .list()?
            .into_iter()
            .map(|d| (d.id().to_string(), d))
            .collect())
    }

    /// Create a deployment and return it as listed afterwards.
    ///
    /// `name` only names the placeholder manifest, see `ApiClient::create_deployment`.
    pub fn create(&self, files: FileMap, name: Option<&str>) -> NowResult<Deployment<T>> {
        let created = self.client.create_deployment(files, name)?;
        let uid = created
            .get("uid")
            .and_then(Value::as_str)
            .ok_or_else(|| NowError::invalid_payload("created deployment", "missing 'uid'"))?;
        self.get(uid)
    }

    /// Pack a local folder and create a deployment named after it
    pub fn create_from_folder(&self, path: &Path) -> NowResult<Deployment<T>> {
        self.create_from_folder_with(&FolderPackager::local(), path)
    }

    pub fn create_from_folder_with<F: FileSystem>(
        &self,
        packager: &FolderPackager<F>,
        path: &Path,
    ) -> NowResult<Deployment<T>> {
        let files = packager.pack(path)?;
        let name = folder_name(path);
        self.create(files, name.as_deref())
    }

    fn wrap(&self, payload: &Value) -> NowResult<Deployment<T>> {
        Ok(Deployment {
            record: DeploymentRecord::from_payload(payload)?,
            client: Arc::clone(&self.client),
        })
    }
}

impl<T> fmt::Debug for Deployments<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deployments { .. }")
    }
}

/// One deployment record with the client needed to act on it
///
/// Built fresh on every collection read; deleting a deployment does not
/// invalidate copies already held.
pub struct Deployment<T> {
    record: DeploymentRecord,
    client: Arc<ApiClient<T>>,
}

impl<T: Transport> Deployment<T> {
    pub fn id(&self) -> &str {
        self.record.id()
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn url(&self) -> &str {
        self.record.url()
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.record.created_at()
    }

    pub fn record(&self) -> &DeploymentRecord {
        &self.record
    }

    pub fn into_record(self) -> DeploymentRecord {
        self.record
    }

    /// Fetch this deployment's file listing
    pub fn files(&self) -> NowResult<Files<T>> {
        Files::fetch(Arc::clone(&self.client), self.record.id())
    }

    /// Remove the deployment from the remote collection
    pub fn delete(&self) -> NowResult<()> {
        self.client.delete_deployment(self.record.id())
    }
}

impl<T> Clone for Deployment<T> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
            client: Arc::clone(&self.client),
        }
    }
}

impl<T> PartialEq for Deployment<T> {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record
    }
}

impl<T> Eq for Deployment<T> {}

impl<T> fmt::Debug for Deployment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Deployment").field(&self.record).finish()
    }
}
