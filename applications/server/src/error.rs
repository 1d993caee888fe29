/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rollcall_core::RollcallError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Body message for every missing-user response
pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] RollcallError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for ServerError {
    // 400 and 500 bodies use an `error` key, 404 bodies use `message`.
    fn into_response(self) -> Response {
        let (status, key, message) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "error", msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, "message", msg),
            ServerError::Store(RollcallError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "error", msg)
            }
            ServerError::Store(ref e) if e.is_not_found() => {
                (StatusCode::NOT_FOUND, "message", USER_NOT_FOUND.to_string())
            }
            ServerError::Store(ref e) => {
                tracing::error!("Store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "error", e.to_string())
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "error", self.to_string())
            }
        };

        (status, Json(json!({ key: message }))).into_response()
    }
}
