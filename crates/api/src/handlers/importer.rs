//! Handler for the bulk CSV employee import.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use hrm_core::importer::{run_import, ImportOutcome};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/employees/import
///
/// Accepts a multipart form with a required `file` field holding UTF-8 CSV:
/// a header row followed by `name, code, position, department, salary` rows.
///
/// Row-level problems and a rolled-back batch are reported in a 200 body.
/// Encoding, empty-file and header problems are 400s.
pub async fn import_employees(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImportOutcome>> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.csv").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((filename, data));
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    tracing::info!(filename = %filename, size_bytes = data.len(), "Employee import received");

    let outcome = run_import(state.employees.as_ref(), &data).await?;

    tracing::info!(
        filename = %filename,
        created = outcome.successful_uploads,
        errors = outcome.errors.len(),
        "Employee import finished",
    );

    Ok(Json(outcome))
}
