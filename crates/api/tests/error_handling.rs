//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use hrm_api::error::AppError;
use hrm_core::error::CoreError;
use hrm_core::importer::ImportError;
use hrm_core::store::StoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn store_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Store(StoreError::NotFound(7))).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Employee with id 7 not found");
}

#[tokio::test]
async fn duplicate_code_returns_409() {
    let err = AppError::Store(StoreError::DuplicateCode("E1".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("name must not be blank".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name must not be blank");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn request_fatal_import_errors_return_400() {
    for err in [
        ImportError::Encoding,
        ImportError::EmptyFile,
        ImportError::MalformedHeader { found: 2 },
    ] {
        let (status, json) = error_to_response(AppError::Import(err)).await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn backend_failures_are_sanitized() {
    let errors = [
        AppError::Store(StoreError::Backend("connection refused".into())),
        AppError::Import(ImportError::Store(StoreError::Backend("pool timeout".into()))),
    ];

    for err in errors {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}
