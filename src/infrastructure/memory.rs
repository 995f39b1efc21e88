//! In-process fake of the deployment API
//!
//! Serves the same routes as the remote service from memory and records
//! every request it receives. Deletions are visible to the next listing.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use serde_json::{json, Value};

use crate::domain::ports::{ApiRequest, ApiResponse, Method, Transport};
use crate::domain::value_objects::{CANONICAL_MANIFEST_KEY, MANIFEST_FILE};
use crate::error::NowResult;

const EPOCH_BASE_MILLIS: i64 = 1_500_000_000_000;

#[derive(Debug, Clone)]
struct StoredFile {
    uid: String,
    name: String,
    content: Vec<u8>,
}

#[derive(Debug, Clone)]
struct StoredDeployment {
    uid: String,
    name: String,
    url: String,
    created: i64,
    files: Vec<StoredFile>,
}

impl StoredDeployment {
    fn payload(&self) -> Value {
        json!({
            "uid": self.uid,
            "name": self.name,
            "url": self.url,
            "created": self.created,
            "state": "READY",
        })
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    deployments: Vec<StoredDeployment>,
    next_id: u64,
    requests: Vec<ApiRequest>,
    failures: VecDeque<(u16, String)>,
}

/// In-memory implementation of the `Transport` port
#[derive(Debug, Default)]
pub struct MemoryTransport {
    state: Mutex<MemoryState>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add a deployment directly, bypassing request recording. Returns its id.
    pub fn seed_deployment(&self, name: &str, files: &[(&str, &str)]) -> String {
        let files = files
            .iter()
            .map(|(path, content)| (path.to_string(), content.as_bytes().to_vec()))
            .collect();
        insert_deployment(&mut self.lock(), name, files)
    }

    /// Make the next request answer with `status` and `message`
    pub fn fail_next(&self, status: u16, message: &str) {
        self.lock().failures.push_back((status, message.to_string()));
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    /// Body of the most recent request that carried one
    pub fn last_body(&self) -> Option<Value> {
        self.lock()
            .requests
            .iter()
            .rev()
            .find_map(|r| r.body.clone())
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    pub fn deployment_count(&self) -> usize {
        self.lock().deployments.len()
    }
}

fn insert_deployment(
    state: &mut MemoryState,
    name: &str,
    files: Vec<(String, Vec<u8>)>,
) -> String {
    state.next_id += 1;
    let n = state.next_id;
    let uid = format!("dpl_{}", n);
    let files = files
        .into_iter()
        .enumerate()
        .map(|(i, (name, content))| StoredFile {
            uid: format!("fil_{}_{}", n, i + 1),
            name,
            content,
        })
        .collect();

    state.deployments.push(StoredDeployment {
        uid: uid.clone(),
        name: name.to_string(),
        url: format!("{}-{}.now.sh", name, n),
        created: EPOCH_BASE_MILLIS + (n as i64) * 1000,
        files,
    });
    uid
}

fn not_found(what: &str) -> ApiResponse {
    ApiResponse::json_body(404, &json!({"error": {"code": "not_found", "message": what}}))
}

/// Name the deployment after its manifest, the way the service does
fn manifest_name(body: &serde_json::Map<String, Value>) -> String {
    let manifest = match body.get(CANONICAL_MANIFEST_KEY) {
        Some(Value::String(text)) => serde_json::from_str(text).unwrap_or(Value::Null),
        Some(other) => other.clone(),
        None => Value::Null,
    };
    manifest
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("deployment")
        .to_string()
}

fn create(state: &mut MemoryState, body: Option<&Value>) -> ApiResponse {
    let Some(Value::Object(body)) = body else {
        return ApiResponse::json_body(400, &json!({"error": {"code": "bad_request"}}));
    };

    let name = manifest_name(body);
    let files = body
        .iter()
        .map(|(path, value)| {
            let path = if path == CANONICAL_MANIFEST_KEY {
                MANIFEST_FILE.to_string()
            } else {
                path.clone()
            };
            let content = match value {
                Value::String(text) => text.clone().into_bytes(),
                other => other.to_string().into_bytes(),
            };
            (path, content)
        })
        .collect();

    let uid = insert_deployment(state, &name, files);
    let created = state
        .deployments
        .iter()
        .find(|d| d.uid == uid)
        .map(StoredDeployment::payload)
        .unwrap_or(Value::Null);
    ApiResponse::json_body(200, &created)
}

fn route(state: &mut MemoryState, request: &ApiRequest) -> ApiResponse {
    let segments: Vec<&str> = request.path.trim_matches('/').split('/').collect();
    let find = |state: &MemoryState, id: &str| state.deployments.iter().position(|d| d.uid == id);

    match (request.method, segments.as_slice()) {
        (Method::Get, ["deployments"]) => {
            let list: Vec<Value> = state
                .deployments
                .iter()
                .map(StoredDeployment::payload)
                .collect();
            ApiResponse::json_body(200, &json!({ "deployments": list }))
        }
        (Method::Post, ["deployments"]) => create(state, request.body.as_ref()),
        (Method::Get, ["deployments", id]) => match find(state, id) {
            Some(i) => ApiResponse::json_body(200, &state.deployments[i].payload()),
            None => not_found("deployment"),
        },
        (Method::Delete, ["deployments", id]) => match find(state, id) {
            Some(i) => {
                state.deployments.remove(i);
                ApiResponse::json_body(200, &json!({ "uid": id, "state": "DELETED" }))
            }
            None => not_found("deployment"),
        },
        (Method::Get, ["deployments", id, "files"]) => match find(state, id) {
            Some(i) => {
                let files: Vec<Value> = state.deployments[i]
                    .files
                    .iter()
                    .map(|f| json!({ "uid": f.uid, "name": f.name, "type": "file" }))
                    .collect();
                ApiResponse::json_body(200, &Value::Array(files))
            }
            None => not_found("deployment"),
        },
        (Method::Get, ["deployments", id, "files", file_id]) => {
            let file = find(state, id)
                .and_then(|i| state.deployments[i].files.iter().find(|f| f.uid == *file_id));
            match file {
                Some(f) => ApiResponse::new(200, f.content.clone()),
                None => not_found("file"),
            }
        }
        _ => not_found("route"),
    }
}

impl Transport for MemoryTransport {
    fn execute(&self, request: &ApiRequest) -> NowResult<ApiResponse> {
        let mut state = self.lock();
        state.requests.push(request.clone());

        if let Some((status, message)) = state.failures.pop_front() {
            return Ok(ApiResponse::new(status, message));
        }
        Ok(route(&mut state, request))
    }
}
