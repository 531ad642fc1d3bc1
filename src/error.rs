//! Unified error type for cafe-api
//!
//! `ApiError` carries the error taxonomy the HTTP surface exposes and maps
//! each kind to its status code and JSON body via `IntoResponse`, so handlers
//! can propagate with `?` instead of building responses by hand.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No record matches the given identifier or criteria (404)
    #[error("{0}")]
    NotFound(String),
    /// Unique constraint violation, e.g. duplicate cafe name (409)
    #[error("{0}")]
    Conflict(String),
    /// Required form input missing or malformed (400)
    #[error("{0}")]
    Validation(String),
    /// Database or infrastructure failure (500, details logged, not leaked)
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// The standard not-found message used by the JSON endpoints
    pub fn cafe_not_found() -> Self {
        ApiError::NotFound("Sorry a cafe with that id was not found in the database.".into())
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "Not Found",
            ApiError::Conflict(_) => "Conflict",
            ApiError::Validation(_) => "Validation",
            ApiError::Database(_) => "Internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let mut detail = serde_json::Map::new();
        detail.insert(self.kind().to_string(), json!(message));
        let body = Json(json!({ "error": detail }));
        (self.status(), body).into_response()
    }
}
