//! Domain record and request payloads.
//!
//! # Design
//! Both payloads parse every field as `Option` so that "supplied" and
//! "absent" are distinct states. The create path turns that into a
//! required non-empty title; the update path uses it to decide which
//! fields of the stored record get overwritten.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// A single todo item as stored and as returned over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Request payload for `POST /todos`. Any client-supplied `id` is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl CreateTodo {
    /// Validate the payload and build the record stored under `id`.
    pub fn into_record(self, id: String) -> Result<TodoRecord, ApiError> {
        let title = match self.title {
            None => return Err(ApiError::Validation("title is required".to_string())),
            Some(title) if title.is_empty() => {
                return Err(ApiError::Validation("title must not be empty".to_string()))
            }
            Some(title) => title,
        };
        Ok(TodoRecord {
            id,
            title,
            completed: self.completed.unwrap_or(false),
        })
    }
}

/// Request payload for `PUT /todos/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// Merge this payload into `record`.
    ///
    /// An empty or absent title leaves the stored title alone. `completed`
    /// is always written, falling back to `false` when absent, so an update
    /// that omits it resets a completed todo.
    pub fn apply(&self, record: &mut TodoRecord) {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            record.title = title.to_string();
        }
        record.completed = self.completed.unwrap_or(false);
    }
}

/// Parse a JSON request body, mapping any failure to a validation error.
///
/// Only a JSON object is accepted; serde would otherwise fill a struct from
/// a positional array. A repeated key keeps its last value.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let invalid = |e: serde_json::Error| ApiError::Validation(format!("invalid request body: {e}"));
    match serde_json::from_slice::<Value>(body).map_err(invalid)? {
        object @ Value::Object(_) => serde_json::from_value(object).map_err(invalid),
        _ => Err(ApiError::Validation("request body must be a JSON object".to_string())),
    }
}
