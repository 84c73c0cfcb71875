use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use itemreg_core::DomainError;

use crate::app::dto::ErrorBody;

/// Errors surfaced to HTTP callers.
///
/// Both kinds are terminal: validation runs before any mutation, and a failed
/// lookup leaves the registry untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Body, query or path did not have the expected shape.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Item not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => Self::NotFound,
            DomainError::InvalidId(msg) => Self::InvalidInput(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let Self::InvalidInput(reason) = &self {
            tracing::debug!(%reason, "rejected request");
        }
        json_error(self.status(), self.to_string())
    }
}

pub fn json_error(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}
