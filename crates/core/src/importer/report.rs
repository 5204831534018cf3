//! Caller-facing import summary.

use super::{ImportOutcome, ImportRowError, RowRef, RowRejection};
use crate::store::BatchCommit;

/// Assemble the response for a finished import.
///
/// On a code collision the per-row errors are kept and one batch-level
/// error is appended after them.
pub fn build_outcome(mut errors: Vec<ImportRowError>, commit: BatchCommit) -> ImportOutcome {
    let (message, successful_uploads) = match commit {
        BatchCommit::Committed(created) => (
            format!("Batch upload complete. {created} record(s) created."),
            created,
        ),
        BatchCommit::CodeCollision => {
            errors.push(ImportRowError::new(
                RowRef::Batch,
                RowRejection::CodeCollision,
                Vec::new(),
            ));
            (
                "Batch upload rolled back. 0 record(s) created.".to_string(),
                0,
            )
        }
    };

    ImportOutcome {
        message,
        successful_uploads,
        errors,
    }
}
