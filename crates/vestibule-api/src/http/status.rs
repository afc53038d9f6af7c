//! Status and identity endpoints.

use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::http::auth::AuthContext;
use crate::http::errors::ApiError;

#[derive(Serialize)]
pub(crate) struct StatusResponse {
    pub(crate) status: &'static str,
}

#[derive(Serialize)]
pub(crate) struct MeResponse {
    pub(crate) id: Uuid,
    pub(crate) identifier: String,
}

pub(crate) async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}

pub(crate) async fn me(
    context: Option<Extension<AuthContext>>,
) -> Result<Json<MeResponse>, ApiError> {
    let Some(Extension(context)) = context else {
        return Err(ApiError::unauthorized("no authenticated principal"));
    };
    Ok(Json(MeResponse {
        id: context.principal.id,
        identifier: context.principal.identifier,
    }))
}
