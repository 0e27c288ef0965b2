//! Validation error types.
//!
//! Uses `thiserror` for typed variants that callers can inspect and map to
//! transport-level responses. Violations are collected, not fail-fast, so a
//! caller sees every offending field at once.

use thiserror::Error;

/// Errors produced by request validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent from the payload.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field value is malformed or out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// The offending field, in wire naming.
        field: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// Multiple field violations occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates an invalid-value error for the given field.
    #[must_use]
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Combines multiple validation errors into a single error.
    ///
    /// If only one error is provided, returns it directly rather than
    /// wrapping.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this
    /// indicates a logic error in the caller. In release builds, returns an
    /// internal error variant.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        match errors.len() {
            0 => {
                debug_assert!(false, "multiple() called with empty errors vector");
                Self::invalid_value("payload", "internal error: no validation errors")
            }
            1 => {
                // Length is verified to be 1 immediately above, so this will always succeed.
                errors
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| {
                        Self::invalid_value("payload", "internal error: no validation errors")
                    })
            }
            _ => Self::Multiple(errors),
        }
    }

    /// Returns `true` if this error represents multiple violations.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}
