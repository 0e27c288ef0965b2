//! Task aggregate root, its lifecycle status, and mutation value objects.

use super::{ProjectId, ResourceId, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Pending,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Error returned while parsing task statuses from request payloads or
/// persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Validated field bundle for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    /// What the task covers.
    pub description: String,
    /// Planned first day of work.
    pub start_date: NaiveDate,
    /// Planned last day of work.
    pub end_date: NaiveDate,
    /// Lifecycle status; defaults to [`TaskStatus::Pending`] upstream.
    pub status: TaskStatus,
    /// Owning project reference.
    pub project_id: ProjectId,
    /// Resource references, in declaration order.
    pub resources: Vec<ResourceId>,
}

/// Partial-field replacement set for updating a task.
///
/// Fields left as `None` keep the stored value. A supplied resource set
/// replaces the stored set verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    /// Replacement description, when supplied.
    pub description: Option<String>,
    /// Replacement start date, when supplied.
    pub start_date: Option<NaiveDate>,
    /// Replacement end date, when supplied.
    pub end_date: Option<NaiveDate>,
    /// Replacement status, when supplied.
    pub status: Option<TaskStatus>,
    /// Replacement owning-project reference, when supplied.
    pub project_id: Option<ProjectId>,
    /// Replacement resource reference set, when supplied.
    pub resources: Option<Vec<ResourceId>>,
}

impl TaskChanges {
    /// Returns the schedule the task would have after applying these
    /// changes to `task`, for cross-field validation of the merged record.
    #[must_use]
    pub fn merged_schedule(&self, task: &Task) -> (NaiveDate, NaiveDate) {
        (
            self.start_date.unwrap_or_else(|| task.start_date()),
            self.end_date.unwrap_or_else(|| task.end_date()),
        )
    }
}

/// Task aggregate root.
///
/// Holds a required owning-project reference and an ordered set of resource
/// references. References are identity values, never embedded copies; they
/// are resolved into full records only by denormalized reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: TaskStatus,
    project_id: ProjectId,
    resources: Vec<ResourceId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from validated fields.
    #[must_use]
    pub fn new(fields: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            description: fields.description,
            start_date: fields.start_date,
            end_date: fields.end_date,
            status: fields.status,
            project_id: fields.project_id,
            resources: fields.resources,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
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

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning-project reference.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the resource references in declaration order.
    #[must_use]
    pub fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    /// Returns `true` when the task references the given resource.
    #[must_use]
    pub fn references_resource(&self, id: ResourceId) -> bool {
        self.resources.contains(&id)
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
    /// Reference existence and cross-field invariants of the merged record
    /// are the caller's responsibility; see [`TaskChanges::merged_schedule`].
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) {
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(start_date) = changes.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(project_id) = changes.project_id {
            self.project_id = project_id;
        }
        if let Some(resources) = changes.resources {
            self.resources = resources;
        }
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
