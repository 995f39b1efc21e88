//! DeploymentRecord entity - one deployment as reported by the API
//!
//! Parsed strictly from the raw payload: `uid`, `name`, `url` and `created`
//! must all be present. Identity is the id alone.

use chrono::{DateTime, Local};
use serde::Deserialize;
use serde_json::Value;
use std::hash::{Hash, Hasher};

use crate::error::{NowError, NowResult};

/// `created` arrives as epoch milliseconds, as a number or a numeric string
#[derive(Deserialize)]
#[serde(untagged)]
enum EpochMillis {
    Number(i64),
    Text(String),
}

impl EpochMillis {
    fn millis(&self) -> Result<i64, String> {
        match self {
            EpochMillis::Number(ms) => Ok(*ms),
            EpochMillis::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("'created' is not an integer: {}", s)),
        }
    }
}

#[derive(Deserialize)]
struct RawDeployment {
    uid: String,
    name: String,
    url: String,
    created: EpochMillis,
}

/// An immutable deployment record
#[derive(Debug, Clone)]
pub struct DeploymentRecord {
    id: String,
    name: String,
    url: String,
    created_at: DateTime<Local>,
}

impl DeploymentRecord {
    /// Parse a raw deployment payload
    pub fn from_payload(payload: &Value) -> NowResult<Self> {
        let raw = RawDeployment::deserialize(payload)
            .map_err(|e| NowError::invalid_payload("deployment", e))?;
        let millis = raw
            .created
            .millis()
            .map_err(|e| NowError::invalid_payload("deployment", e))?;
        let created_at = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| {
                NowError::invalid_payload(
                    "deployment",
                    format!("'created' out of range: {}", millis),
                )
            })?
            .with_timezone(&Local);

        Ok(Self {
            id: raw.uid,
            name: raw.name,
            url: raw.url,
            created_at,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Host the deployment is served on
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

impl PartialEq for DeploymentRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeploymentRecord {}

impl Hash for DeploymentRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
