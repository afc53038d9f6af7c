//! Authentication middleware for the HTTP layer.
//!
//! The path guard runs first; exempt paths skip credential resolution
//! entirely. Everything else is a verdict mapping: exempt/authenticated
//! proceed, unauthenticated is 401, rejected is 403. Responses never say
//! which pipeline stage failed.

use std::sync::Arc;

use axum::{extract::State, http::Request, middleware::Next, response::Response};
use tracing::debug;
use vestibule_auth::{AuthVerdict, Principal};

use crate::http::errors::ApiError;
use crate::state::ApiState;

/// Authenticated principal attached to request extensions.
#[derive(Debug, Clone)]
pub(crate) struct AuthContext {
    pub(crate) principal: Principal,
}

pub(crate) async fn require_auth(
    State(state): State<Arc<ApiState>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.authenticator.requires_auth(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let verdict = state.authenticator.authenticate(req.headers()).await;
    match verdict {
        AuthVerdict::Exempt => Ok(next.run(req).await),
        AuthVerdict::Authenticated(principal) => {
            debug!(identifier = %principal.identifier, "request authenticated");
            req.extensions_mut().insert(AuthContext { principal });
            Ok(next.run(req).await)
        }
        AuthVerdict::Unauthenticated => Err(ApiError::unauthorized("authentication required")),
        AuthVerdict::Rejected => Err(ApiError::forbidden("credentials rejected")),
    }
}
