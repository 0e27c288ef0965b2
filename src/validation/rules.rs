//! Individual validation rule implementations.
//!
//! Each rule is a pure function over a single field (or field pair) that
//! returns `Ok(())` or a specific [`ValidationError`]. The validator service
//! composes them per entity and collects the failures.

use crate::domain::TaskStatus;
use crate::validation::error::ValidationError;
use chrono::NaiveDate;

/// Validates the character length of a text field.
///
/// The caller passes the trimmed value; lengths are counted in characters,
/// matching the limits enforced by the form layer.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` when the text is shorter than
/// `min` or longer than `max` characters.
pub fn validate_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < min {
        let reason = if min <= 1 {
            "must not be empty".to_owned()
        } else {
            format!("must be at least {min} characters")
        };
        return Err(ValidationError::invalid_value(field, reason));
    }
    if length > max {
        return Err(ValidationError::invalid_value(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Validates that an end date does not precede a start date.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` on the end-date field when the
/// ordering is violated.
pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::invalid_value(
            "endDate",
            format!("end date {end} precedes start date {start}"),
        ));
    }
    Ok(())
}

/// Validates that a numeric field is finite and not negative.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` for NaN, infinite, or negative
/// values.
pub fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_value(
            field,
            "must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(ValidationError::invalid_value(field, "must not be negative"));
    }
    Ok(())
}

/// Parses a task status from its wire representation.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` when the value is not one of the
/// enumerated statuses.
pub fn parse_status(value: &str) -> Result<TaskStatus, ValidationError> {
    TaskStatus::try_from(value).map_err(|err| ValidationError::invalid_value("status", err.to_string()))
}
