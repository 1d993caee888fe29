/// Error redaction middleware
use crate::config::RunMode;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Body sent in place of any 500 response outside development mode
pub const OPAQUE_ERROR_MESSAGE: &str = "Something went wrong!";

/// Middleware that hides internal error details unless the server runs in
/// development mode
///
/// The original error has already been logged by `ServerError::into_response`.
pub async fn redact_internal_errors(
    State(mode): State<RunMode>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if mode.exposes_errors() || response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "message": OPAQUE_ERROR_MESSAGE,
            "error": {},
        })),
    )
        .into_response()
}
