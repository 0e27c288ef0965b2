//! Task linkage rules and denormalized task reads.
//!
//! A task's owning-project reference must resolve whenever it is set;
//! resource references are accepted unverified and only become visible as
//! dangling on denormalized reads, which fail open by omitting them.

use crate::domain::{Project, ProjectId, Resource, Task, TaskId};
use crate::ports::{
    ProjectRepository, RepositoryError, ResourceRepository, TaskRepository,
};
use crate::validation::{RequestValidator, TaskPayload, ValidationError, rules};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Result type for task linkage operations.
pub type TaskLinkageResult<T> = Result<T, TaskLinkageError>;

/// Service-level errors for task linkage operations.
#[derive(Debug, Error)]
pub enum TaskLinkageError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The task id does not resolve to a stored task.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The project id named in a listing request does not resolve.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The project reference embedded in the payload does not resolve.
    #[error("referenced project not found: {0}")]
    UnknownProject(ProjectId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Denormalized read model: a task with its referenced records resolved
/// inline.
///
/// Resolution fails open. A project reference that no longer resolves
/// renders as `None`, and a resource reference that no longer resolves is
/// omitted from `resources`; both are logged. Resources keep the task's
/// declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// The stored task record.
    pub task: Task,
    /// The owning project, when its reference still resolves.
    pub project: Option<Project>,
    /// The referenced resources that still resolve, in declaration order.
    pub resources: Vec<Resource>,
}

/// Guards task/project/resource linkage and assembles denormalized views.
pub struct TaskLinkageService<P, T, R, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    R: ResourceRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    resources: Arc<R>,
    clock: Arc<C>,
    validator: RequestValidator,
}

impl<P, T, R, C> TaskLinkageService<P, T, R, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    R: ResourceRepository,
    C: Clock + Send + Sync,
{
    /// Creates a task linkage service with the default validator.
    #[must_use]
    pub fn new(projects: Arc<P>, tasks: Arc<T>, resources: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_validator(projects, tasks, resources, clock, RequestValidator::new())
    }

    /// Creates a task linkage service with a custom validator.
    #[must_use]
    pub const fn with_validator(
        projects: Arc<P>,
        tasks: Arc<T>,
        resources: Arc<R>,
        clock: Arc<C>,
        validator: RequestValidator,
    ) -> Self {
        Self {
            projects,
            tasks,
            resources,
            clock,
            validator,
        }
    }

    /// Creates a new task and returns its denormalized view.
    ///
    /// The owning project must exist at the moment of creation. Resource
    /// references are stored as given, without an existence check.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLinkageError::Validation`] for missing or invalid
    /// fields and [`TaskLinkageError::UnknownProject`] when the project
    /// reference does not resolve; nothing is persisted in either case.
    pub async fn create(&self, payload: &TaskPayload) -> TaskLinkageResult<TaskView> {
        let fields = self.validator.validate_new_task(payload)?;
        if !self.projects.exists(fields.project_id).await? {
            return Err(TaskLinkageError::UnknownProject(fields.project_id));
        }

        let task = Task::new(fields, &*self.clock);
        self.tasks.insert(&task).await?;
        self.resolve(task).await
    }

    /// Replaces the supplied fields of an existing task and returns its
    /// denormalized view.
    ///
    /// A supplied project reference must resolve before the update is
    /// applied; a supplied resource set replaces the stored set verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLinkageError::NotFound`] when the task id does not
    /// resolve, [`TaskLinkageError::UnknownProject`] when a supplied
    /// project reference does not, and [`TaskLinkageError::Validation`]
    /// when a supplied field is invalid or the merged dates are out of
    /// order.
    pub async fn update(&self, id: TaskId, payload: &TaskPayload) -> TaskLinkageResult<TaskView> {
        let changes = self.validator.validate_task_changes(payload)?;
        let Some(mut task) = self.tasks.find_by_id(id).await? else {
            return Err(TaskLinkageError::NotFound(id));
        };

        if let Some(project_id) = changes.project_id {
            if !self.projects.exists(project_id).await? {
                return Err(TaskLinkageError::UnknownProject(project_id));
            }
        }

        let (start_date, end_date) = changes.merged_schedule(&task);
        rules::validate_date_order(start_date, end_date)?;

        task.apply(changes, &*self.clock);
        if !self.tasks.replace(&task).await? {
            return Err(TaskLinkageError::NotFound(id));
        }
        self.resolve(task).await
    }

    /// Deletes a task unconditionally; no cascading effect on the project
    /// or resources it referenced.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLinkageError::NotFound`] when the id does not resolve,
    /// so a repeated delete reports the absence instead of succeeding
    /// twice.
    pub async fn delete(&self, id: TaskId) -> TaskLinkageResult<()> {
        if !self.tasks.delete(id).await? {
            return Err(TaskLinkageError::NotFound(id));
        }
        Ok(())
    }

    /// Retrieves a task by id as a denormalized view.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLinkageError::NotFound`] when the id does not resolve.
    pub async fn get(&self, id: TaskId) -> TaskLinkageResult<TaskView> {
        let Some(task) = self.tasks.find_by_id(id).await? else {
            return Err(TaskLinkageError::NotFound(id));
        };
        self.resolve(task).await
    }

    /// Returns denormalized views for all stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLinkageError::Repository`] when a lookup fails.
    pub async fn list(&self) -> TaskLinkageResult<Vec<TaskView>> {
        let tasks = self.tasks.list().await?;
        self.resolve_all(tasks).await
    }

    /// Returns denormalized views for the tasks owned by a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLinkageError::ProjectNotFound`] when the project id
    /// does not resolve; a project without tasks yields an empty list.
    pub async fn list_by_project(
        &self,
        project_id: ProjectId,
    ) -> TaskLinkageResult<Vec<TaskView>> {
        if !self.projects.exists(project_id).await? {
            return Err(TaskLinkageError::ProjectNotFound(project_id));
        }
        let tasks = self.tasks.find_by_project(project_id).await?;
        self.resolve_all(tasks).await
    }

    async fn resolve_all(&self, tasks: Vec<Task>) -> TaskLinkageResult<Vec<TaskView>> {
        let mut views = Vec::with_capacity(tasks.len());
        for task in tasks {
            views.push(self.resolve(task).await?);
        }
        Ok(views)
    }

    /// Assembles the denormalized view for one task, omitting references
    /// that no longer resolve.
    async fn resolve(&self, task: Task) -> TaskLinkageResult<TaskView> {
        let project = self.projects.find_by_id(task.project_id()).await?;
        if project.is_none() {
            warn!(
                task = %task.id(),
                project = %task.project_id(),
                "task references a project that no longer resolves"
            );
        }

        let mut resources = Vec::with_capacity(task.resources().len());
        for resource_id in task.resources() {
            match self.resources.find_by_id(*resource_id).await? {
                Some(resource) => resources.push(resource),
                None => warn!(
                    task = %task.id(),
                    resource = %resource_id,
                    "omitting a resource reference that no longer resolves"
                ),
            }
        }

        Ok(TaskView {
            task,
            project,
            resources,
        })
    }
}
