//! Repository ports for entity persistence, lookup, and deletion.
//!
//! Absence is part of the contract, not an error: lookups return `Option`,
//! and `replace`/`delete` report whether a stored record was affected. The
//! services translate absence into their own not-found errors before any
//! mutation is issued.

use crate::domain::{Project, ProjectId, Resource, ResourceId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// A record with the same identifier is already stored.
    #[error("duplicate identifier: {0}")]
    DuplicateId(Uuid),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateId`] when the identifier is
    /// already stored.
    async fn insert(&self, project: &Project) -> RepositoryResult<()>;

    /// Replaces a stored project wholesale.
    ///
    /// Returns `false` when no project with the identifier exists; nothing
    /// is stored in that case.
    async fn replace(&self, project: &Project) -> RepositoryResult<bool>;

    /// Finds a project by identifier.
    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>>;

    /// Returns all stored projects, in no particular order.
    async fn list(&self) -> RepositoryResult<Vec<Project>>;

    /// Deletes a project, reporting whether a record was removed.
    async fn delete(&self, id: ProjectId) -> RepositoryResult<bool>;

    /// Reports whether a project with the identifier is stored.
    async fn exists(&self, id: ProjectId) -> RepositoryResult<bool>;
}

/// Task persistence contract.
///
/// Beyond plain CRUD, the contract exposes the two reference lookups the
/// integrity layer depends on: tasks by owning project, and any task holding
/// a given resource reference. Implementations should back both with an
/// index rather than a scan where the storage engine allows it.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateId`] when the identifier is
    /// already stored.
    async fn insert(&self, task: &Task) -> RepositoryResult<()>;

    /// Replaces a stored task wholesale, including its reference fields.
    ///
    /// Returns `false` when no task with the identifier exists; nothing is
    /// stored in that case.
    async fn replace(&self, task: &Task) -> RepositoryResult<bool>;

    /// Finds a task by identifier.
    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns all stored tasks, in no particular order.
    async fn list(&self) -> RepositoryResult<Vec<Task>>;

    /// Returns the tasks owned by the given project.
    ///
    /// The project itself is not checked for existence; callers gate on
    /// that first when the contract requires it.
    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>>;

    /// Returns the identifier of one task whose reference set contains the
    /// given resource, or `None` when the resource is unreferenced.
    async fn find_any_referencing(
        &self,
        resource_id: ResourceId,
    ) -> RepositoryResult<Option<TaskId>>;

    /// Deletes a task, reporting whether a record was removed.
    async fn delete(&self, id: TaskId) -> RepositoryResult<bool>;

    /// Reports whether a task with the identifier is stored.
    async fn exists(&self, id: TaskId) -> RepositoryResult<bool>;
}

/// Resource persistence contract.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Stores a new resource.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateId`] when the identifier is
    /// already stored.
    async fn insert(&self, resource: &Resource) -> RepositoryResult<()>;

    /// Replaces a stored resource wholesale.
    ///
    /// Returns `false` when no resource with the identifier exists; nothing
    /// is stored in that case.
    async fn replace(&self, resource: &Resource) -> RepositoryResult<bool>;

    /// Finds a resource by identifier.
    async fn find_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>>;

    /// Returns all stored resources, in no particular order.
    async fn list(&self) -> RepositoryResult<Vec<Resource>>;

    /// Deletes a resource, reporting whether a record was removed.
    async fn delete(&self, id: ResourceId) -> RepositoryResult<bool>;

    /// Reports whether a resource with the identifier is stored.
    async fn exists(&self, id: ResourceId) -> RepositoryResult<bool>;
}
