//! Batch coordination: decode, parse, stage, commit.

use std::collections::HashSet;

use super::report::build_outcome;
use super::row::validate_row;
use super::{
    ImportError, ImportOutcome, ImportRowError, RowRef, RowRejection, EXPECTED_COLUMNS,
    FIRST_DATA_ROW,
};
use crate::employee::NewEmployee;
use crate::store::{BatchCommit, EmployeeStore};

/// Fields of one CSV record, as read. A blank line is a record with no fields.
pub type RawRow = Vec<String>;

/// Header plus data rows of a decoded upload.
#[derive(Debug)]
pub struct ParsedUpload {
    pub header: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Rows accepted for creation and rows rejected, in encounter order.
#[derive(Debug, Default)]
pub struct StagedBatch {
    pub staged: Vec<NewEmployee>,
    pub errors: Vec<ImportRowError>,
}

/// Decode an upload and split it into a header and data rows.
///
/// Rejects the whole request when the bytes are not UTF-8, when the file has
/// no rows at all, or when the header has fewer than five columns.
pub fn parse_upload(bytes: &[u8]) -> Result<ParsedUpload, ImportError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ImportError::Encoding)?;

    let mut records = read_records(text)?.into_iter();
    let header = records.next().ok_or(ImportError::EmptyFile)?;
    if header.len() < EXPECTED_COLUMNS {
        return Err(ImportError::MalformedHeader {
            found: header.len(),
        });
    }

    Ok(ParsedUpload {
        header,
        rows: records.collect(),
    })
}

/// Read every record of `text`, keeping blank lines as empty records.
///
/// The csv reader skips blank lines on its own, which would shift the
/// display number of every later row. The bytes it consumed before each
/// record are inspected to put them back.
fn read_records(text: &str) -> Result<Vec<RawRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut record = csv::StringRecord::new();
    let mut records = Vec::new();

    loop {
        let start = reader.position().byte() as usize;
        let found = reader.read_record(&mut record)?;
        records.extend(std::iter::repeat_with(Vec::new).take(blank_lines_at(text, start)));
        if !found {
            break;
        }
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(records)
}

/// Count the empty lines starting at byte `start` of `text`.
///
/// `start` may sit between the `\r` and `\n` of the previous record's
/// terminator; that `\n` does not open a line of its own.
fn blank_lines_at(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut rest = &bytes[start..];
    if start > 0 && bytes[start - 1] == b'\r' {
        if let [b'\n', tail @ ..] = rest {
            rest = tail;
        }
    }

    let mut count = 0;
    loop {
        rest = match rest {
            [b'\r', b'\n', tail @ ..] | [b'\r' | b'\n', tail @ ..] => tail,
            _ => return count,
        };
        count += 1;
    }
}

/// Validate every data row and drop later repeats of an employee code.
///
/// The first occurrence of a code wins; each later row with the same code is
/// reported as a duplicate. Rows rejected by validation do not claim their
/// code.
pub fn stage_rows(rows: Vec<RawRow>) -> StagedBatch {
    let mut batch = StagedBatch::default();
    let mut seen_codes: HashSet<String> = HashSet::new();

    for (index, fields) in rows.into_iter().enumerate() {
        let row_number = index + FIRST_DATA_ROW;

        let employee = match validate_row(row_number, &fields) {
            Ok(employee) => employee,
            Err(err) => {
                batch.errors.push(err);
                continue;
            }
        };

        if !seen_codes.insert(employee.employee_code.clone()) {
            batch.errors.push(ImportRowError::new(
                RowRef::Line(row_number),
                RowRejection::DuplicateInUpload {
                    code: employee.employee_code,
                },
                fields,
            ));
            continue;
        }

        batch.staged.push(employee);
    }

    batch
}

/// Run a complete import of `bytes` against `store`.
///
/// All staged rows are written with one [`EmployeeStore::create_batch`] call.
/// If the store reports a code collision nothing is written, and the outcome
/// carries zero successes plus one batch-level error after the per-row errors.
/// The store is not called when no row survived validation.
pub async fn run_import(
    store: &dyn EmployeeStore,
    bytes: &[u8],
) -> Result<ImportOutcome, ImportError> {
    let upload = parse_upload(bytes)?;
    let row_count = upload.rows.len();
    let batch = stage_rows(upload.rows);

    tracing::debug!(
        rows = row_count,
        staged = batch.staged.len(),
        rejected = batch.errors.len(),
        "Import rows validated",
    );

    let commit = if batch.staged.is_empty() {
        BatchCommit::Committed(0)
    } else {
        store.create_batch(&batch.staged).await?
    };

    match commit {
        BatchCommit::Committed(created) => {
            tracing::info!(created, rejected = batch.errors.len(), "Import committed");
        }
        BatchCommit::CodeCollision => {
            tracing::warn!(
                staged = batch.staged.len(),
                "Import rolled back: employee code collides with existing data",
            );
        }
    }

    Ok(build_outcome(batch.errors, commit))
}
