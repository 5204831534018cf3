//! Bulk employee import from CSV uploads.
//!
//! The pipeline is split into three stages:
//!
//! - [`row`]: pure validation of one raw CSV row.
//! - [`batch`]: decoding, header checks, in-upload duplicate detection and the
//!   single atomic commit against an [`EmployeeStore`](crate::store::EmployeeStore).
//! - [`report`]: the caller-facing summary.
//!
//! Per-row problems are collected as [`ImportRowError`] values and never abort
//! the upload. Only [`ImportError`] aborts a request.

pub mod batch;
pub mod report;
pub mod row;

pub use batch::{parse_upload, run_import, stage_rows, ParsedUpload, RawRow, StagedBatch};
pub use report::build_outcome;
pub use row::validate_row;

use serde::{Serialize, Serializer};

use crate::store::StoreError;

// ── Constants ────────────────────────────────────────────────────────

/// Columns every row must carry, in order: name, code, position,
/// department, salary.
pub const EXPECTED_COLUMNS: usize = 5;

/// Display number of the first data row (the header is row 1).
pub const FIRST_DATA_ROW: usize = 2;

/// Value of `row` for the synthetic error produced by a rolled-back batch.
pub const BATCH_ERROR_LABEL: &str = "Batch Error";

// ── Types ────────────────────────────────────────────────────────────

/// Where an import error applies: a numbered CSV row or the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef {
    Line(usize),
    Batch,
}

impl Serialize for RowRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Line(n) => serializer.serialize_u64(*n as u64),
            Self::Batch => serializer.serialize_str(BATCH_ERROR_LABEL),
        }
    }
}

/// Why a row (or the batch) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowRejection {
    #[error("insufficient fields: expected at least 5 columns, found {found}")]
    InsufficientFields { found: usize },

    #[error("required field missing: name, code, position, department and salary are all mandatory")]
    RequiredFieldMissing,

    #[error("invalid salary format: '{text}' is not a valid non-negative number")]
    InvalidSalary { text: String },

    #[error("duplicate within this upload: employee code '{code}' appears on an earlier row")]
    DuplicateInUpload { code: String },

    #[error("employee code collision with existing data: the whole batch was rolled back and no records were created")]
    CodeCollision,
}

/// One rejected row, with the raw fields kept for the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRowError {
    pub row: RowRef,
    pub error: String,
    pub data: Vec<String>,
    #[serde(skip)]
    pub kind: RowRejection,
}

impl ImportRowError {
    pub fn new(row: RowRef, kind: RowRejection, data: Vec<String>) -> Self {
        Self {
            row,
            error: kind.to_string(),
            data,
            kind,
        }
    }
}

/// Response body of an import request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub message: String,
    pub successful_uploads: usize,
    pub errors: Vec<ImportRowError>,
}

/// Failures that abort an import before (or instead of) producing an outcome.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("File is not valid UTF-8; please re-save it with UTF-8 encoding")]
    Encoding,

    #[error("File is empty")]
    EmptyFile,

    #[error(
        "Header is incomplete: expected 5 columns \
         (name, code, position, department, salary), found {found}"
    )]
    MalformedHeader { found: usize },

    #[error("File could not be read as CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}
