//! Validation of a single raw CSV row.

use super::{ImportRowError, RowRef, RowRejection, EXPECTED_COLUMNS};
use crate::employee::NewEmployee;

/// Turn one raw row into a creation payload, or reject it.
///
/// Checks run in order and stop at the first failure: column count, blank
/// fields, salary. Columns past the fifth are ignored. The salary is read as
/// a decimal and truncated toward zero, so `"50000.9"` becomes `50000`.
pub fn validate_row(row_number: usize, fields: &[String]) -> Result<NewEmployee, ImportRowError> {
    let reject = |kind| ImportRowError::new(RowRef::Line(row_number), kind, fields.to_vec());

    if fields.len() < EXPECTED_COLUMNS {
        return Err(reject(RowRejection::InsufficientFields {
            found: fields.len(),
        }));
    }

    let [name, code, position, department, salary_text] =
        [0, 1, 2, 3, 4].map(|i| fields[i].trim());

    if [name, code, position, department, salary_text]
        .iter()
        .any(|f| f.is_empty())
    {
        return Err(reject(RowRejection::RequiredFieldMissing));
    }

    let salary = parse_salary(salary_text).ok_or_else(|| {
        reject(RowRejection::InvalidSalary {
            text: salary_text.to_string(),
        })
    })?;

    Ok(NewEmployee {
        name: name.to_string(),
        employee_code: code.to_string(),
        position: position.to_string(),
        department: department.to_string(),
        salary,
    })
}

fn parse_salary(text: &str) -> Option<i64> {
    let value: f64 = strip_digit_separators(text)?.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated < 0.0 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Drop `_` digit-group separators (`"50_000"`). Each one must sit between
/// two digits, otherwise the text is not a number.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let grouped_correctly = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    grouped_correctly.then(|| text.replace('_', ""))
}
