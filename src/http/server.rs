//! HTTP server setup and request handlers.
//!
//! # Responsibilities
//! - Create the Axum router with the diagnostic and liveness handlers
//! - Wire up middleware (request tracing)
//! - Expose the peer address to handlers via `ConnectInfo`
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - One handler serves every path except `/healthz`; only GET is routed,
//!   other methods get 405 from the method router
//! - The trace and `Vary` response headers are set on every diagnostic
//!   response, including ones where negotiation fell back to the default

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::identity::Identity;
use crate::inspect::{negotiate, RequestReport};

/// Response header carrying the server's resolved identity.
pub const X_TRACE: HeaderName = HeaderName::from_static("x-trace");

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<Identity>,
}

/// HTTP server for the diagnostic endpoint.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server reporting the given identity.
    pub fn new(identity: Identity) -> Self {
        let state = AppState {
            identity: Arc::new(identity),
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/healthz", get(healthz))
            .route("/", get(inspect_handler))
            .route("/{*path}", get(inspect_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Diagnostic handler: negotiate, capture, serialize.
async fn inspect_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
) -> Response {
    let accept = joined_accept(request.headers());
    let content_type = negotiate(accept.as_deref());

    tracing::debug!(
        peer = %addr,
        method = %request.method(),
        path = %request.uri().path(),
        content_type = content_type.as_str(),
        "Inspecting request"
    );

    let report = RequestReport::capture(&state.identity, addr.ip(), &request);

    let body = match serde_json::to_string(&report) {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!(%error, "Could not serialize report");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(X_TRACE, state.identity.trace_value().clone());
    headers.insert(header::VARY, HeaderValue::from_static("Accept"));
    headers.insert(header::CONTENT_TYPE, content_type.header_value());

    (StatusCode::OK, headers, body).into_response()
}

/// Liveness handler: success, empty body, no negotiation.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Join all `Accept` occurrences into the single value negotiation parses.
///
/// Returns `None` when the header is absent, which negotiation treats
/// differently from an empty value.
fn joined_accept(headers: &HeaderMap) -> Option<String> {
    let values: Vec<_> = headers
        .get_all(header::ACCEPT)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
