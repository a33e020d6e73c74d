//! Synchronous client for the todo API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller owns the transport, so the crate has no
//! async runtime or HTTP stack of its own.
//!
//! ```
//! use todo_client::{CreateTodo, TodoClient};
//!
//! let client = TodoClient::new("http://localhost:8080");
//! let request = client.build_create_todo(&CreateTodo::new("Buy milk")).unwrap();
//! assert_eq!(request.path, "http://localhost:8080/api/v1/todos");
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TodoClient, DEFAULT_PREFIX};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Health, Todo, UpdateTodo};
