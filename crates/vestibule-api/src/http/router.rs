//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    Router,
    http::{Method, Request, header::AUTHORIZATION, header::CONTENT_TYPE},
    middleware,
    routing::get,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;
use vestibule_auth::Authenticator;

use crate::http::auth::require_auth;
use crate::http::constants::HEADER_REQUEST_ID;
use crate::http::errors::ApiError;
use crate::http::status::{me, status};
use crate::state::ApiState;

/// Axum router wrapper that hosts the Vestibule API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct a new API server around the active authenticator.
    ///
    /// The authenticator was selected once at startup; the router never
    /// re-reads configuration. The auth guard wraps routing itself, so
    /// unmatched paths are checked before the 404 fallback answers.
    #[must_use]
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        let state = Arc::new(ApiState::new(authenticator));
        let guard = middleware::from_fn_with_state(state, require_auth);

        let cors_layer = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let method = request.method().clone();
                let uri_path = request.uri().path();
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();

                tracing::info_span!(
                    "http.request",
                    method = %method,
                    route = %uri_path,
                    request_id = %request_id,
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    let status = response.status().as_u16();
                    span.record("status_code", status);
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );

        let layered = ServiceBuilder::new()
            .layer(vestibule_telemetry::propagate_request_id_layer())
            .layer(vestibule_telemetry::set_request_id_layer())
            .layer(trace_layer);

        let router = Router::new()
            .route("/api/v1/status", get(status))
            .route("/api/v1/me", get(me))
            .fallback(not_found)
            .layer(guard)
            .layer(cors_layer)
            .layer(layered);

        Self { router }
    }

    /// Serve the API using the configured router on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server
    /// terminates unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        tracing::info!("Starting API on {}", addr);
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router.into_make_service()).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn router(&self) -> Router {
        self.router.clone()
    }
}

async fn not_found() -> ApiError {
    ApiError::not_found("resource not found")
}
