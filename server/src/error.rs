//! Error types for the todo API.
//!
//! # Design
//! `ApiError` is the only error a handler can return. Both variants are
//! client-side outcomes: they are answered with a 4xx status and a
//! `{"error": "..."}` body and never escape the handler that raised them.
//! `StartupError` covers the few ways the process can fail before it starts
//! serving.

use std::{io, net::SocketAddr};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is malformed or misses a required field.
    #[error("{0}")]
    Validation(String),

    /// No todo exists under the requested id.
    #[error("Todo not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Errors that abort the process during bootstrap.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid CORS origin {origin:?}")]
    InvalidCorsOrigin { origin: String },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
