use axum::{http::StatusCode, Json};
use utoipa::OpenApi;

use crate::app::openapi::ApiDoc;

/// Liveness probe.
#[utoipa::path(get, path = "/health", tag = "system", responses((status = 200, description = "Service is up")))]
pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
