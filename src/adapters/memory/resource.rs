//! In-memory resource repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::domain::{Resource, ResourceId};
use crate::ports::{RepositoryError, RepositoryResult, ResourceRepository};

/// Thread-safe in-memory resource repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceRepository {
    state: Arc<RwLock<HashMap<ResourceId, Resource>>>,
}

impl InMemoryResourceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn insert(&self, resource: &Resource) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&resource.id()) {
            return Err(RepositoryError::DuplicateId(resource.id().into_inner()));
        }
        state.insert(resource.id(), resource.clone());
        Ok(())
    }

    async fn replace(&self, resource: &Resource) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.contains_key(&resource.id()) {
            return Ok(false);
        }
        state.insert(resource.id(), resource.clone());
        Ok(true)
    }

    async fn find_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(&id).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Resource>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.values().cloned().collect())
    }

    async fn delete(&self, id: ResourceId) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        Ok(state.remove(&id).is_some())
    }

    async fn exists(&self, id: ResourceId) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.contains_key(&id))
    }
}
