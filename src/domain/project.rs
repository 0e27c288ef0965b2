//! Project aggregate root and the value objects that create and mutate it.

use super::ProjectId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated field bundle for creating a project.
///
/// Produced by the request validator; the field values are already trimmed
/// and range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// Free-text description, when supplied.
    pub description: Option<String>,
    /// Planned first day of work.
    pub start_date: NaiveDate,
    /// Planned last day of work.
    pub end_date: NaiveDate,
    /// Allocated budget.
    pub budget: f64,
}

/// Partial-field replacement set for updating a project.
///
/// Fields left as `None` keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    /// Replacement name, when supplied.
    pub name: Option<String>,
    /// Replacement description, when supplied.
    pub description: Option<String>,
    /// Replacement start date, when supplied.
    pub start_date: Option<NaiveDate>,
    /// Replacement end date, when supplied.
    pub end_date: Option<NaiveDate>,
    /// Replacement budget, when supplied.
    pub budget: Option<f64>,
}

impl ProjectChanges {
    /// Returns `true` when no field is being replaced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.budget.is_none()
    }

    /// Returns the schedule the project would have after applying these
    /// changes to `project`, for cross-field validation of the merged
    /// record.
    #[must_use]
    pub fn merged_schedule(&self, project: &Project) -> (NaiveDate, NaiveDate) {
        (
            self.start_date.unwrap_or_else(|| project.start_date()),
            self.end_date.unwrap_or_else(|| project.end_date()),
        )
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: ProjectId,
    name: String,
    description: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    budget: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project from validated fields.
    #[must_use]
    pub fn new(fields: NewProject, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            name: fields.name,
            description: fields.description,
            start_date: fields.start_date,
            end_date: fields.end_date,
            budget: fields.budget,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description, when one was supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the planned first day of work.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the planned last day of work.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the allocated budget.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the supplied fields and refreshes the update timestamp.
    ///
    /// Cross-field invariants of the merged record (date ordering) are the
    /// caller's responsibility; see [`ProjectChanges::merged_schedule`].
    pub fn apply(&mut self, changes: ProjectChanges, clock: &impl Clock) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(start_date) = changes.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            self.end_date = end_date;
        }
        if let Some(budget) = changes.budget {
            self.budget = budget;
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
