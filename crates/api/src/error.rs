use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hrm_core::error::CoreError;
use hrm_core::importer::ImportError;
use hrm_core::store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`], [`StoreError`] and [`ImportError`] and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hrm_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the employee store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request-fatal import failure.
    #[error(transparent)]
    Import(#[from] ImportError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Domain validation ---
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            // --- Store errors ---
            AppError::Store(err) => classify_store_error(err),

            // --- Import errors ---
            AppError::Import(ImportError::Store(err)) => classify_store_error(err),
            AppError::Import(err) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", err.to_string()),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a store error into an HTTP status, error code, and message.
///
/// - `NotFound` maps to 404.
/// - `DuplicateCode` maps to 409.
/// - Backend failures map to 500 with a sanitized message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        StoreError::DuplicateCode(_) => (StatusCode::CONFLICT, "CONFLICT", err.to_string()),
        StoreError::Backend(msg) => internal(msg),
    }
}

fn internal(msg: &str) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %msg, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
