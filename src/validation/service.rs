//! Request validator service.
//!
//! Composes the individual rules per entity and operation, collecting all
//! field violations before returning. Create-validation produces the
//! `New…` field bundles; update-validation produces the `…Changes` sets,
//! checking only the fields present in the payload. Cross-field invariants
//! that need the stored record (date ordering of a merged update) are
//! re-checked by the services.

use crate::domain::{
    NewProject, NewResource, NewTask, ProjectChanges, ResourceChanges, Supplier, TaskChanges,
    TaskStatus,
};
use crate::validation::error::ValidationError;
use crate::validation::requests::{
    ProjectPayload, ResourcePayload, SupplierPayload, TaskPayload,
};
use crate::validation::rules;

/// No upper bound on a text field's length.
const UNBOUNDED: usize = usize::MAX;

/// Bounds applied by the request validator.
///
/// The defaults match the limits the original form layer enforces.
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    /// Maximum name length in characters (projects and resources).
    pub max_name_length: usize,
    /// Maximum description length in characters.
    pub max_description_length: usize,
    /// Minimum task description length in characters.
    pub min_task_description_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            max_description_length: 500,
            min_task_description_length: 5,
        }
    }
}

/// Field-level request validator for all three entities.
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    limits: ValidationLimits,
}

impl RequestValidator {
    /// Creates a validator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn with_limits(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    /// Returns the limits in force.
    #[must_use]
    pub const fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Validates a project-creation payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] covering every missing or invalid
    /// field; nothing is normalized on failure.
    pub fn validate_new_project(
        &self,
        payload: &ProjectPayload,
    ) -> Result<NewProject, ValidationError> {
        let mut errors = Vec::new();
        let name = checked_text(
            "name",
            payload.name.as_deref(),
            1,
            self.limits.max_name_length,
            &mut errors,
        );
        let description = optional_text(
            "description",
            payload.description.as_deref(),
            1,
            self.limits.max_description_length,
            &mut errors,
        );
        let start_date = required("startDate", payload.start_date, &mut errors);
        let end_date = required("endDate", payload.end_date, &mut errors);
        let budget = checked_amount("budget", payload.budget, &mut errors);
        push_date_order(start_date, end_date, &mut errors);

        match (name, start_date, end_date, budget) {
            (Some(name), Some(start_date), Some(end_date), Some(budget))
                if errors.is_empty() =>
            {
                Ok(NewProject {
                    name,
                    description,
                    start_date,
                    end_date,
                    budget,
                })
            }
            _ => Err(ValidationError::multiple(errors)),
        }
    }

    /// Validates a project-update payload, checking only the fields present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] covering every invalid field.
    pub fn validate_project_changes(
        &self,
        payload: &ProjectPayload,
    ) -> Result<ProjectChanges, ValidationError> {
        let mut errors = Vec::new();
        let name = optional_text(
            "name",
            payload.name.as_deref(),
            1,
            self.limits.max_name_length,
            &mut errors,
        );
        let description = optional_text(
            "description",
            payload.description.as_deref(),
            1,
            self.limits.max_description_length,
            &mut errors,
        );
        let budget = optional_amount("budget", payload.budget, &mut errors);
        push_date_order(payload.start_date, payload.end_date, &mut errors);

        if errors.is_empty() {
            Ok(ProjectChanges {
                name,
                description,
                start_date: payload.start_date,
                end_date: payload.end_date,
                budget,
            })
        } else {
            Err(ValidationError::multiple(errors))
        }
    }

    /// Validates a task-creation payload.
    ///
    /// Resource references are carried through untouched; whether they
    /// resolve is decided elsewhere.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] covering every missing or invalid
    /// field.
    pub fn validate_new_task(&self, payload: &TaskPayload) -> Result<NewTask, ValidationError> {
        let mut errors = Vec::new();
        let description = checked_text(
            "description",
            payload.description.as_deref(),
            self.limits.min_task_description_length,
            self.limits.max_description_length,
            &mut errors,
        );
        let start_date = required("startDate", payload.start_date, &mut errors);
        let end_date = required("endDate", payload.end_date, &mut errors);
        let status = checked_status(payload.status.as_deref(), &mut errors);
        let project_id = required("projectId", payload.project_id, &mut errors);
        push_date_order(start_date, end_date, &mut errors);

        match (description, start_date, end_date, status, project_id) {
            (Some(description), Some(start_date), Some(end_date), Some(status), Some(project_id))
                if errors.is_empty() =>
            {
                Ok(NewTask {
                    description,
                    start_date,
                    end_date,
                    status,
                    project_id,
                    resources: payload.resources.clone().unwrap_or_default(),
                })
            }
            _ => Err(ValidationError::multiple(errors)),
        }
    }

    /// Validates a task-update payload, checking only the fields present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] covering every invalid field.
    pub fn validate_task_changes(
        &self,
        payload: &TaskPayload,
    ) -> Result<TaskChanges, ValidationError> {
        let mut errors = Vec::new();
        let description = optional_text(
            "description",
            payload.description.as_deref(),
            self.limits.min_task_description_length,
            self.limits.max_description_length,
            &mut errors,
        );
        let status = match payload.status.as_deref() {
            None => None,
            Some(raw) => match rules::parse_status(raw) {
                Ok(status) => Some(status),
                Err(err) => {
                    errors.push(err);
                    None
                }
            },
        };
        push_date_order(payload.start_date, payload.end_date, &mut errors);

        if errors.is_empty() {
            Ok(TaskChanges {
                description,
                start_date: payload.start_date,
                end_date: payload.end_date,
                status,
                project_id: payload.project_id,
                resources: payload.resources.clone(),
            })
        } else {
            Err(ValidationError::multiple(errors))
        }
    }

    /// Validates a resource-creation payload, including the nested supplier
    /// when one is present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] covering every missing or invalid
    /// field.
    pub fn validate_new_resource(
        &self,
        payload: &ResourcePayload,
    ) -> Result<NewResource, ValidationError> {
        let mut errors = Vec::new();
        let name = checked_text(
            "name",
            payload.name.as_deref(),
            1,
            self.limits.max_name_length,
            &mut errors,
        );
        let kind = checked_text("type", payload.kind.as_deref(), 1, UNBOUNDED, &mut errors);
        let quantity = checked_amount("quantity", payload.quantity, &mut errors);
        let supplier = match payload.supplier.as_ref() {
            None => None,
            Some(nested) => checked_supplier(nested, &mut errors),
        };
        let cost_per_unit = optional_amount("costPerUnit", payload.cost_per_unit, &mut errors);

        match (name, kind, quantity) {
            (Some(name), Some(kind), Some(quantity)) if errors.is_empty() => Ok(NewResource {
                name,
                kind,
                quantity,
                supplier,
                cost_per_unit,
            }),
            _ => Err(ValidationError::multiple(errors)),
        }
    }

    /// Validates a resource-update payload, checking only the fields
    /// present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] covering every invalid field.
    pub fn validate_resource_changes(
        &self,
        payload: &ResourcePayload,
    ) -> Result<ResourceChanges, ValidationError> {
        let mut errors = Vec::new();
        let name = optional_text(
            "name",
            payload.name.as_deref(),
            1,
            self.limits.max_name_length,
            &mut errors,
        );
        let kind = optional_text("type", payload.kind.as_deref(), 1, UNBOUNDED, &mut errors);
        let quantity = optional_amount("quantity", payload.quantity, &mut errors);
        let supplier = match payload.supplier.as_ref() {
            None => None,
            Some(nested) => checked_supplier(nested, &mut errors),
        };
        let cost_per_unit = optional_amount("costPerUnit", payload.cost_per_unit, &mut errors);

        if errors.is_empty() {
            Ok(ResourceChanges {
                name,
                kind,
                quantity,
                supplier,
                cost_per_unit,
            })
        } else {
            Err(ValidationError::multiple(errors))
        }
    }
}

/// Requires a text field, trimming and length-checking it.
fn checked_text(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    match value {
        None => {
            errors.push(ValidationError::MissingField(field));
            None
        }
        Some(raw) => validated_text(field, raw, min, max, errors),
    }
}

/// Trims and length-checks a text field when it is present.
fn optional_text(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    value.and_then(|raw| validated_text(field, raw, min, max, errors))
}

fn validated_text(
    field: &'static str,
    raw: &str,
    min: usize,
    max: usize,
    errors: &mut Vec<ValidationError>,
) -> Option<String> {
    let trimmed = raw.trim();
    match rules::validate_text(field, trimmed, min, max) {
        Ok(()) => Some(trimmed.to_owned()),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Requires a field of any copyable type to be present.
fn required<T: Copy>(
    field: &'static str,
    value: Option<T>,
    errors: &mut Vec<ValidationError>,
) -> Option<T> {
    if value.is_none() {
        errors.push(ValidationError::MissingField(field));
    }
    value
}

/// Requires a non-negative finite numeric field.
fn checked_amount(
    field: &'static str,
    value: Option<f64>,
    errors: &mut Vec<ValidationError>,
) -> Option<f64> {
    match value {
        None => {
            errors.push(ValidationError::MissingField(field));
            None
        }
        Some(amount) => validated_amount(field, amount, errors),
    }
}

/// Range-checks a numeric field when it is present.
fn optional_amount(
    field: &'static str,
    value: Option<f64>,
    errors: &mut Vec<ValidationError>,
) -> Option<f64> {
    value.and_then(|amount| validated_amount(field, amount, errors))
}

fn validated_amount(
    field: &'static str,
    amount: f64,
    errors: &mut Vec<ValidationError>,
) -> Option<f64> {
    match rules::validate_non_negative(field, amount) {
        Ok(()) => Some(amount),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Parses the status when present, defaulting to pending otherwise.
fn checked_status(
    value: Option<&str>,
    errors: &mut Vec<ValidationError>,
) -> Option<TaskStatus> {
    match value {
        None => Some(TaskStatus::default()),
        Some(raw) => match rules::parse_status(raw) {
            Ok(status) => Some(status),
            Err(err) => {
                errors.push(err);
                None
            }
        },
    }
}

/// Validates the supplier sub-payload, requiring name and contact.
fn checked_supplier(
    payload: &SupplierPayload,
    errors: &mut Vec<ValidationError>,
) -> Option<Supplier> {
    let name = checked_text("supplier.name", payload.name.as_deref(), 1, UNBOUNDED, errors);
    let contact = checked_text(
        "supplier.contact",
        payload.contact.as_deref(),
        1,
        UNBOUNDED,
        errors,
    );
    let email = optional_text("supplier.email", payload.email.as_deref(), 1, UNBOUNDED, errors);
    match (name, contact) {
        (Some(name), Some(contact)) => Some(Supplier {
            name,
            contact,
            email,
        }),
        _ => None,
    }
}

/// Checks date ordering when both dates are available.
fn push_date_order(
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
    errors: &mut Vec<ValidationError>,
) {
    if let (Some(start_date), Some(end_date)) = (start, end) {
        if let Err(err) = rules::validate_date_order(start_date, end_date) {
            errors.push(err);
        }
    }
}
