use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// The ingestion pipeline has exactly one client-visible failure mode: a
/// submission with no parseable JSON body. Everything else is either
/// tolerated (missing and wrong-typed fields default to zero) or swallowed
/// (delivery to sessions is fire-and-forget).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request carried no parseable JSON body.
    #[error("no json body")]
    NoJsonBody,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NoJsonBody => StatusCode::BAD_REQUEST,
        };

        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}
