//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the wildcard dispatch route
//! - Wire up middleware (tracing, body limits, request ID)
//! - Bind application state into handlers
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - One route matches every path; only POST bodies dispatch, anything
//!   else gets a plain 404 without touching the application
//! - Bodies are read as bytes and classified afterwards, so the declared
//!   content type is irrelevant (content-type normalization)
//! - The body size limit is the only admission control; no timeouts, no
//!   retries, no backpressure beyond it

use std::io;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::app::host::AppHost;
use crate::config::schema::ServerConfig;
use crate::config::size::SizeError;
use crate::dispatch::envelope::RequestEnvelope;
use crate::dispatch::handler::dispatch;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};

/// Application state injected into handlers.
///
/// Constructed once at process start and passed by reference into each
/// request; there is no module-level state.
#[derive(Clone)]
pub struct AppState {
    pub host: Arc<AppHost>,
    pub config: Arc<ServerConfig>,
}

/// HTTP server for the dispatch shim.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// application host.
    pub fn new(config: ServerConfig, host: Arc<AppHost>) -> Result<Self, SizeError> {
        let body_limit = config.limits.effective_limit()?;
        let state = AppState {
            host,
            config: Arc::new(config.clone()),
        };
        let router = Self::build_router(body_limit, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(body_limit: usize, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(body_limit))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            raw_body = self.config.limits.raw_body,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Main dispatch handler: classify the body, then route it.
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let Some(envelope) = RequestEnvelope::classify(&method, &body, state.config.limits.raw_body)
    else {
        tracing::debug!(
            request_id = %request_id,
            method = %method,
            "Non-POST request bypassed dispatch"
        );
        return StatusCode::NOT_FOUND.into_response();
    };

    tracing::debug!(
        request_id = %request_id,
        kind = envelope.kind(),
        "Dispatching request"
    );

    dispatch(&state.host, &state.config.resources, envelope).await
}
