use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::store::StoreError;

/// Failures a handler cannot recover into a domain message. Everything that
/// reaches a client through this type is a server-side fault.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Store(err) = self;
        tracing::error!("store error: {err}");
        let error_response = serde_json::json!({
            "status": "error",
            "message": format!("Database error: {}", err),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response)).into_response()
    }
}
