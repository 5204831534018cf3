//! Employee entity and the creation/replacement payload shared by the
//! single-record endpoints and the bulk importer.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: DbId,
    pub employee_code: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for creating an employee or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewEmployee {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub employee_code: String,
    #[validate(custom(function = "not_blank"))]
    pub position: String,
    #[validate(custom(function = "not_blank"))]
    pub department: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub salary: i64,
}

impl NewEmployee {
    /// Trim surrounding whitespace from every text field.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            employee_code: self.employee_code.trim().to_string(),
            position: self.position.trim().to_string(),
            department: self.department.trim().to_string(),
            salary: self.salary,
        }
    }
}

/// Trim and validate a payload arriving through the single-record API.
///
/// Returns [`CoreError::Validation`] listing every offending field.
pub fn validate_new_employee(input: NewEmployee) -> Result<NewEmployee, CoreError> {
    let input = input.trimmed();
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))?;
    Ok(input)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field} {reason}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
