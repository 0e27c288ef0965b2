//! Project lifecycle rules: creation, mutation, and unconditional deletion.

use crate::domain::{Project, ProjectId};
use crate::ports::{ProjectRepository, RepositoryError};
use crate::validation::{ProjectPayload, RequestValidator, ValidationError, rules};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project lifecycle operations.
pub type ProjectLifecycleResult<T> = Result<T, ProjectLifecycleError>;

/// Service-level errors for project lifecycle operations.
#[derive(Debug, Error)]
pub enum ProjectLifecycleError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The project id does not resolve to a stored project.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Owns the create/update/delete rules for projects.
///
/// Deletion is unconditional: tasks referencing the project keep their
/// reference, which from then on resolves to nothing. Denormalized task
/// reads render such references as absent.
pub struct ProjectLifecycleService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    validator: RequestValidator,
}

impl<R, C> ProjectLifecycleService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a project lifecycle service with the default validator.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_validator(repository, clock, RequestValidator::new())
    }

    /// Creates a project lifecycle service with a custom validator.
    #[must_use]
    pub const fn with_validator(
        repository: Arc<R>,
        clock: Arc<C>,
        validator: RequestValidator,
    ) -> Self {
        Self {
            repository,
            clock,
            validator,
        }
    }

    /// Creates a new project and returns the stored record.
    ///
    /// Names are not required to be unique.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Validation`] when required fields
    /// are absent or out of range, before anything is persisted.
    pub async fn create(&self, payload: &ProjectPayload) -> ProjectLifecycleResult<Project> {
        let fields = self.validator.validate_new_project(payload)?;
        let project = Project::new(fields, &*self.clock);
        self.repository.insert(&project).await?;
        Ok(project)
    }

    /// Replaces the supplied fields of an existing project and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::NotFound`] when the id does not
    /// resolve, or [`ProjectLifecycleError::Validation`] when a supplied
    /// field is invalid or the merged dates are out of order.
    pub async fn update(
        &self,
        id: ProjectId,
        payload: &ProjectPayload,
    ) -> ProjectLifecycleResult<Project> {
        let changes = self.validator.validate_project_changes(payload)?;
        let Some(mut project) = self.repository.find_by_id(id).await? else {
            return Err(ProjectLifecycleError::NotFound(id));
        };

        let (start_date, end_date) = changes.merged_schedule(&project);
        rules::validate_date_order(start_date, end_date)?;

        project.apply(changes, &*self.clock);
        if !self.repository.replace(&project).await? {
            return Err(ProjectLifecycleError::NotFound(id));
        }
        Ok(project)
    }

    /// Deletes a project unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::NotFound`] when the id does not
    /// resolve, so a repeated delete reports the absence instead of
    /// succeeding twice.
    pub async fn delete(&self, id: ProjectId) -> ProjectLifecycleResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProjectLifecycleError::NotFound(id));
        }
        Ok(())
    }

    /// Retrieves a project by id.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::NotFound`] when the id does not
    /// resolve.
    pub async fn get(&self, id: ProjectId) -> ProjectLifecycleResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectLifecycleError::NotFound(id))
    }

    /// Returns all stored projects, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self) -> ProjectLifecycleResult<Vec<Project>> {
        Ok(self.repository.list().await?)
    }
}
