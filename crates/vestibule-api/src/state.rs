//! Shared state for HTTP handlers and middleware.

use std::sync::Arc;

use vestibule_auth::Authenticator;

/// Dependencies shared across the HTTP surface.
pub struct ApiState {
    pub(crate) authenticator: Arc<dyn Authenticator>,
}

impl ApiState {
    pub(crate) fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        Self { authenticator }
    }
}
