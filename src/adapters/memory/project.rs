//! In-memory project repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::domain::{Project, ProjectId};
use crate::ports::{ProjectRepository, RepositoryError, RepositoryResult};

/// Thread-safe in-memory project repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: &Project) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&project.id()) {
            return Err(RepositoryError::DuplicateId(project.id().into_inner()));
        }
        state.insert(project.id(), project.clone());
        Ok(())
    }

    async fn replace(&self, project: &Project) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.contains_key(&project.id()) {
            return Ok(false);
        }
        state.insert(project.id(), project.clone());
        Ok(true)
    }

    async fn find_by_id(&self, id: ProjectId) -> RepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(&id).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.values().cloned().collect())
    }

    async fn delete(&self, id: ProjectId) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.remove(&id).is_some())
    }

    async fn exists(&self, id: ProjectId) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.contains_key(&id))
    }
}
