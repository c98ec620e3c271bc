// src/presentation/http/controllers/system.rs
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: String,
    /// `live` when a provider credential is configured, otherwise `offline`.
    pub generation_mode: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
        generation_mode: state.services.generation_mode().as_str().into(),
    })
}
