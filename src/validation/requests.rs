//! Request payload structs per entity.
//!
//! Every field is optional: the payloads mirror whatever JSON body the HTTP
//! layer parsed, and the validator decides which fields the operation at
//! hand requires. Field naming follows the wire format (camelCase).

use crate::domain::{ProjectId, ResourceId};
use chrono::NaiveDate;
use serde::Deserialize;

/// Candidate fields for creating or updating a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    /// Project name.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Planned first day of work.
    pub start_date: Option<NaiveDate>,
    /// Planned last day of work.
    pub end_date: Option<NaiveDate>,
    /// Allocated budget.
    pub budget: Option<f64>,
}

/// Candidate fields for creating or updating a task.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    /// What the task covers.
    pub description: Option<String>,
    /// Planned first day of work.
    pub start_date: Option<NaiveDate>,
    /// Planned last day of work.
    pub end_date: Option<NaiveDate>,
    /// Lifecycle status, as free text pending validation.
    pub status: Option<String>,
    /// Owning project reference.
    pub project_id: Option<ProjectId>,
    /// Resource references, in declaration order.
    pub resources: Option<Vec<ResourceId>>,
}

/// Candidate fields for creating or updating a resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePayload {
    /// Resource name.
    pub name: Option<String>,
    /// Free-text category.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Available quantity.
    pub quantity: Option<f64>,
    /// Supplier details.
    pub supplier: Option<SupplierPayload>,
    /// Unit cost.
    pub cost_per_unit: Option<f64>,
}

/// Candidate supplier fields nested in a resource payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    /// Supplier name.
    pub name: Option<String>,
    /// Contact channel.
    pub contact: Option<String>,
    /// Contact email.
    pub email: Option<String>,
}
