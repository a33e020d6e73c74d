//! Errors returned by the client's `build_*` and `parse_*` methods.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 404: the server has no todo under the requested id.
    #[error("not found: {0}")]
    NotFound(String),

    /// 400: the server rejected the request body.
    #[error("rejected by server: {0}")]
    Validation(String),

    /// Any other status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
