use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::database::activity_registry::RegistryError;

/// Errors a handler can return; each maps to a status and a `{"detail": ...}` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Missing required query parameter: email")]
    MissingEmail,

    /// The path or query string could not be extracted.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Not Found")]
    RouteNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Registry(e) if e.is_conflict() => StatusCode::BAD_REQUEST,
            ApiError::Registry(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingEmail | ApiError::InvalidRequest(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Router fallback so unmatched paths answer with the same JSON error shape.
pub async fn not_found_fallback() -> ApiError {
    ApiError::RouteNotFound
}
