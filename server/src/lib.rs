//! In-memory todo REST API.
//!
//! # Overview
//! Five JSON endpoints under `/api/v1` create, list, fetch, update and
//! delete todo records held in a process-local [`TodoStore`]. Nothing is
//! persisted; records vanish when the process exits.
//!
//! # Design
//! - The store is an explicit value handed to the router as state, so every
//!   test can build an isolated instance.
//! - [`app`] is the bare API contract. [`router`] adds what the deployed
//!   service needs around it: CORS for the browser UI, static docs, and
//!   request tracing.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{ApiError, StartupError};
pub use model::{CreateTodo, TodoRecord, UpdateTodo};
pub use store::TodoStore;

/// Version segment every todo route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// The todo routes, relative to [`API_PREFIX`].
pub fn api_routes() -> Router<TodoStore> {
    use handlers::*;

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
}

/// The API contract: versioned todo routes plus the health probe.
pub fn app(store: TodoStore) -> Router {
    Router::new()
        .nest(API_PREFIX, api_routes())
        .route("/health", get(handlers::health))
        .with_state(store)
}

/// The full service as deployed: [`app`] plus docs, CORS and tracing.
pub fn router(config: &Config, store: TodoStore) -> Result<Router, StartupError> {
    Ok(app(store)
        .route("/", get(docs_redirect))
        .nest_service("/docs", ServeDir::new(&config.docs_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins)?))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, StartupError> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| StartupError::InvalidCorsOrigin { origin: origin.clone() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE))
}

async fn docs_redirect() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/docs/index.html")])
}

/// Serve `router` on `listener` until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Build the store and router from `config`, bind, and serve.
pub async fn serve(config: Config) -> Result<(), StartupError> {
    let store = TodoStore::new();
    if config.seed_demo {
        store::seed_demo(&store).await;
        tracing::info!(count = store.len().await, "seeded demo todos");
    }
    if !config.docs_dir.is_dir() {
        tracing::warn!(dir = %config.docs_dir.display(), "docs directory not found, /docs will answer 404");
    }

    let router = router(&config, store)?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!(%addr, cors_origins = ?config.cors_origins, "listening");

    run(listener, router).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let origins = vec!["http://localhost:3000".to_string(), "https://todo.example".to_string()];
        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn cors_layer_rejects_unparseable_origin() {
        let result = cors_layer(&["bad\norigin".to_string()]);
        assert!(matches!(result, Err(StartupError::InvalidCorsOrigin { .. })));
    }

    #[test]
    fn router_builds_from_default_config() {
        assert!(router(&Config::default(), TodoStore::new()).is_ok());
    }
}
