//! Request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the base URL and the API prefix. Every operation
//! is a `build_*` / `parse_*` pair: the first produces an `HttpRequest`, the
//! second interprets the `HttpResponse` the caller got back. Ids are opaque
//! strings and are placed in the path as given.

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, ErrorBody, Health, Todo, UpdateTodo};

/// Prefix the server mounts its todo routes under.
pub const DEFAULT_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
    prefix: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Replace the API prefix, e.g. `""` for a server mounted at the root.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    fn todos_url(&self) -> String {
        format!("{}{}/todos", self.base_url, self.prefix)
    }

    fn todo_url(&self, id: &str) -> String {
        format!("{}/{id}", self.todos_url())
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.todos_url())
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.todo_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input).map_err(ClientError::Serialization)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.todos_url(), body))
    }

    pub fn build_update_todo(&self, id: &str, input: &UpdateTodo) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input).map_err(ClientError::Serialization)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.todo_url(id), body))
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Delete, self.todo_url(id))
    }

    /// The health probe lives outside the API prefix.
    pub fn build_health(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, format!("{}/health", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        parse_body(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_body(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_body(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        parse_body(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ClientError> {
        parse_body(response, 200)
    }
}

fn parse_body<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ClientError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(ClientError::Deserialization)
}

/// Map an unexpected status to the matching `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ClientError::NotFound(error_message(response))),
        400 => Err(ClientError::Validation(error_message(response))),
        status => Err(ClientError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

/// The `error` field of the body, or the raw body if it is not an error object.
fn error_message(response: &HttpResponse) -> String {
    serde_json::from_str::<ErrorBody>(&response.body)
        .map(|body| body.error)
        .unwrap_or_else(|_| response.body.clone())
}
