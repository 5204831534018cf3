//! HTTP-level integration tests for the bulk CSV import endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, employee_json, get, import_csv, post_file, post_json, CSV_HEADER};

fn csv(rows: &str) -> Vec<u8> {
    format!("{CSV_HEADER}{rows}").into_bytes()
}

#[tokio::test]
async fn test_mixed_upload_reports_row_errors() {
    let app = common::build_test_app(common::memory_store());
    let body = csv("Alice,E100,Eng,R&D,50000\n\
                    Bob,,Eng,R&D,60000\n\
                    Carol,E100,HR,HR,70000\n");

    let response = import_csv(app.clone(), &body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["successful_uploads"], 1);
    assert!(json["message"].as_str().unwrap().contains('1'));

    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);

    assert_eq!(errors[0]["row"], 3);
    assert!(errors[0]["error"]
        .as_str()
        .unwrap()
        .starts_with("required field missing"));
    assert_eq!(
        errors[0]["data"],
        serde_json::json!(["Bob", "", "Eng", "R&D", "60000"])
    );

    assert_eq!(errors[1]["row"], 4);
    assert!(errors[1]["error"]
        .as_str()
        .unwrap()
        .starts_with("duplicate within this upload"));

    let listed = body_json(get(app, "/api/v1/employees").await).await;
    let items = listed["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Alice");
    assert_eq!(items[0]["salary"], 50000);
}

#[tokio::test]
async fn test_blank_line_is_reported_at_its_own_row() {
    let app = common::build_test_app(common::memory_store());
    let body = csv("Alice,E1,Eng,R&D,1\n\nBob,E2,Eng,R&D,50_000\nCarol,E3,Eng,R&D,x\n");

    let json = body_json(import_csv(app, &body).await).await;
    assert_eq!(json["successful_uploads"], 2);

    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["row"], 3);
    assert_eq!(errors[0]["data"], serde_json::json!([]));
    assert!(errors[0]["error"]
        .as_str()
        .unwrap()
        .starts_with("insufficient fields"));
    assert_eq!(errors[1]["row"], 5);
}

#[tokio::test]
async fn test_existing_code_rolls_back_batch() {
    let app = common::build_test_app(common::memory_store());
    post_json(app.clone(), "/api/v1/employees", employee_json("E001", "Existing")).await;

    let body = csv("New,N1,Eng,R&D,100\nClash,E001,Eng,R&D,200\nBad,N2,Eng,R&D,abc\n");
    let response = import_csv(app.clone(), &body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["successful_uploads"], 0);
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["row"], 4);
    assert!(errors[0]["error"].as_str().unwrap().contains("'abc'"));
    assert_eq!(errors[1]["row"], "Batch Error");
    assert_eq!(errors[1]["data"], serde_json::json!([]));

    let listed = body_json(get(app, "/api/v1/employees").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_resubmitted_rollback_is_reported_identically() {
    let app = common::build_test_app(common::memory_store());
    post_json(app.clone(), "/api/v1/employees", employee_json("E001", "Existing")).await;
    let body = csv("Clash,E001,Eng,R&D,1\nShort,E2\n");

    let first = body_json(import_csv(app.clone(), &body).await).await;
    let second = body_json(import_csv(app, &body).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_malformed_header_returns_400_and_creates_nothing() {
    let app = common::build_test_app(common::memory_store());
    let body = b"name,code,position\nAlice,E1,Eng,R&D,1\n";

    let response = import_csv(app.clone(), body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("found 3"));

    let listed = body_json(get(app, "/api/v1/employees").await).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_file_returns_400() {
    let app = common::build_test_app(common::memory_store());
    let response = import_csv(app, b"").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "File is empty");
}

#[tokio::test]
async fn test_non_utf8_file_returns_400() {
    let app = common::build_test_app(common::memory_store());
    let mut body = CSV_HEADER.as_bytes().to_vec();
    body.extend_from_slice(b"\xa4\xfd\xa4p\xa9\xfa,E1,Eng,R&D,1\n");

    let response = import_csv(app, &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("UTF-8"));
}

#[tokio::test]
async fn test_missing_file_field_returns_400() {
    let app = common::build_test_app(common::memory_store());
    let response = post_file(
        app,
        "/api/v1/employees/import",
        "attachment",
        "employees.csv",
        &csv("Alice,E1,Eng,R&D,1\n"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required 'file' field");
}

#[tokio::test]
async fn test_header_only_file_creates_nothing() {
    let app = common::build_test_app(common::memory_store());
    let response = import_csv(app, CSV_HEADER.as_bytes()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["successful_uploads"], 0);
    assert!(json["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let app = common::build_test_app(common::memory_store());
    let limit = common::test_config().max_upload_bytes;
    let row = "Someone,E1,Eng,R&D,1\n";
    let body = csv(&row.repeat(limit / row.len() + 1));

    let response = import_csv(app, &body).await;
    assert!(response.status().is_client_error());
}
