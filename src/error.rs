use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::llm::LlmError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("translation backend failed: {0}")]
    Upstream(#[from] LlmError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            warn!("Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
