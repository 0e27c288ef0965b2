//! Resource lifecycle rules and the in-use deletion guard.

use crate::domain::{Resource, ResourceId, TaskId};
use crate::ports::{RepositoryError, ResourceRepository, TaskRepository};
use crate::validation::{RequestValidator, ResourcePayload, ValidationError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for resource integrity operations.
pub type ResourceIntegrityResult<T> = Result<T, ResourceIntegrityError>;

/// Service-level errors for resource integrity operations.
#[derive(Debug, Error)]
pub enum ResourceIntegrityError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The resource id does not resolve to a stored resource.
    #[error("resource not found: {0}")]
    NotFound(ResourceId),

    /// Deletion blocked: a task still references the resource.
    #[error("resource {resource} is referenced by task {task}")]
    InUse {
        /// The resource whose deletion was blocked.
        resource: ResourceId,
        /// One task whose reference set contains the resource.
        task: TaskId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Owns the resource lifecycle, most importantly the rule that a resource
/// referenced by any task cannot be deleted.
pub struct ResourceIntegrityService<R, T, C>
where
    R: ResourceRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    resources: Arc<R>,
    tasks: Arc<T>,
    clock: Arc<C>,
    validator: RequestValidator,
}

impl<R, T, C> ResourceIntegrityService<R, T, C>
where
    R: ResourceRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a resource integrity service with the default validator.
    #[must_use]
    pub fn new(resources: Arc<R>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self::with_validator(resources, tasks, clock, RequestValidator::new())
    }

    /// Creates a resource integrity service with a custom validator.
    #[must_use]
    pub const fn with_validator(
        resources: Arc<R>,
        tasks: Arc<T>,
        clock: Arc<C>,
        validator: RequestValidator,
    ) -> Self {
        Self {
            resources,
            tasks,
            clock,
            validator,
        }
    }

    /// Creates a new resource and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIntegrityError::Validation`] when required fields
    /// are absent or out of range, before anything is persisted.
    pub async fn create(&self, payload: &ResourcePayload) -> ResourceIntegrityResult<Resource> {
        let fields = self.validator.validate_new_resource(payload)?;
        let resource = Resource::new(fields, &*self.clock);
        self.resources.insert(&resource).await?;
        Ok(resource)
    }

    /// Replaces the supplied fields of an existing resource and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIntegrityError::NotFound`] when the id does not
    /// resolve, or [`ResourceIntegrityError::Validation`] when a supplied
    /// field is invalid.
    pub async fn update(
        &self,
        id: ResourceId,
        payload: &ResourcePayload,
    ) -> ResourceIntegrityResult<Resource> {
        let changes = self.validator.validate_resource_changes(payload)?;
        let Some(mut resource) = self.resources.find_by_id(id).await? else {
            return Err(ResourceIntegrityError::NotFound(id));
        };

        resource.apply(changes, &*self.clock);
        if !self.resources.replace(&resource).await? {
            return Err(ResourceIntegrityError::NotFound(id));
        }
        Ok(resource)
    }

    /// Deletes a resource, unless a task still references it.
    ///
    /// The usage check runs before the existence check, matching the rule
    /// that a referenced id must never be deleted out from under its
    /// tasks. The check and the delete are two store calls; the crate
    /// accepts that window rather than imposing a locking discipline the
    /// store does not have.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIntegrityError::InUse`] naming one referencing
    /// task when the resource is still in use, and
    /// [`ResourceIntegrityError::NotFound`] when the id does not resolve.
    pub async fn delete(&self, id: ResourceId) -> ResourceIntegrityResult<()> {
        if let Some(task) = self.tasks.find_any_referencing(id).await? {
            return Err(ResourceIntegrityError::InUse { resource: id, task });
        }
        if !self.resources.delete(id).await? {
            return Err(ResourceIntegrityError::NotFound(id));
        }
        Ok(())
    }

    /// Retrieves a resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIntegrityError::NotFound`] when the id does not
    /// resolve.
    pub async fn get(&self, id: ResourceId) -> ResourceIntegrityResult<Resource> {
        self.resources
            .find_by_id(id)
            .await?
            .ok_or(ResourceIntegrityError::NotFound(id))
    }

    /// Returns all stored resources, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceIntegrityError::Repository`] when the lookup
    /// fails.
    pub async fn list(&self) -> ResourceIntegrityResult<Vec<Resource>> {
        Ok(self.resources.list().await?)
    }
}
