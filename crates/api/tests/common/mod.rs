#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hrm_api::config::{CorsOrigins, ServerConfig};
use hrm_api::router::build_app_router;
use hrm_api::state::AppState;
use hrm_core::store::{EmployeeStore, InMemoryEmployeeStore};

pub const CSV_HEADER: &str = "name,code,position,department,salary\n";

/// Build a test `ServerConfig` with safe defaults.
///
/// Allows only `http://localhost:5173` as CORS origin and uses a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".to_string()]),
        request_timeout_secs: 30,
        max_upload_bytes: 64 * 1024,
        database_url: None,
        seed_sample_data: false,
    }
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Arc<dyn EmployeeStore> {
    Arc::new(InMemoryEmployeeStore::new())
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn EmployeeStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Like [`build_test_app`] but with a caller-supplied configuration.
pub fn build_test_app_with_config(store: Arc<dyn EmployeeStore>, config: ServerConfig) -> Router {
    let state = AppState {
        employees: store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a multipart form with a single file field.
pub async fn post_file(
    app: Router,
    uri: &str,
    field_name: &str,
    filename: &str,
    contents: &[u8],
) -> Response {
    let boundary = "hrm-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n\
             Content-Type: text/csv\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// POST a CSV file in the `file` field of the import endpoint.
pub async fn import_csv(app: Router, contents: &[u8]) -> Response {
    post_file(app, "/api/v1/employees/import", "file", "employees.csv", contents).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn employee_json(code: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "employee_code": code,
        "position": "Engineer",
        "department": "R&D",
        "salary": 50000,
    })
}
