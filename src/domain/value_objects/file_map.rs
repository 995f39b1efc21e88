//! File Map Value Object
//!
//! The request body for deployment creation: relative path to file content.
//! Values are JSON so a synthesized manifest can sit next to plain text files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Mapping from forward-slash relative path to file content
///
/// Iteration order is sorted by path. Callers must not rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileMap(Map<String, Value>);

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text file, returning the previous value at that path
    pub fn insert_text(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Option<Value> {
        self.0.insert(path.into(), Value::String(content.into()))
    }

    /// Insert an arbitrary JSON value at `path`
    pub fn insert(&mut self, path: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(path.into(), value)
    }

    pub fn remove(&mut self, path: &str) -> Option<Value> {
        self.0.remove(path)
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.0.get(path)
    }

    /// Content at `path` if it is a text file
    pub fn text(&self, path: &str) -> Option<&str> {
        self.0.get(path).and_then(Value::as_str)
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The JSON object sent on the wire
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<BTreeMap<String, String>> for FileMap {
    fn from(files: BTreeMap<String, String>) -> Self {
        files.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FileMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FileMap::new();
        for (path, content) in iter {
            map.insert_text(path, content);
        }
        map
    }
}
