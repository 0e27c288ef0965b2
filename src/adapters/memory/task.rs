//! In-memory task repository with reference indexes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::domain::{ProjectId, ResourceId, Task, TaskId};
use crate::ports::{RepositoryError, RepositoryResult, TaskRepository};

/// Thread-safe in-memory task repository.
///
/// Alongside the task records it maintains two secondary indexes so that
/// by-project listings and the resource-in-use check are single lookups
/// rather than table scans.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    project_index: HashMap<ProjectId, Vec<TaskId>>,
    resource_index: HashMap<ResourceId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_task(state: &mut InMemoryTaskState, task: &Task) {
    state
        .project_index
        .entry(task.project_id())
        .or_default()
        .push(task.id());
    for resource_id in task.resources() {
        state
            .resource_index
            .entry(*resource_id)
            .or_default()
            .push(task.id());
    }
}

fn deindex_task(state: &mut InMemoryTaskState, task: &Task) {
    remove_from_index(&mut state.project_index, task.project_id(), task.id());
    for resource_id in task.resources() {
        remove_from_index(&mut state.resource_index, *resource_id, task.id());
    }
}

/// Removes a task ID from an index entry, dropping the entry when empty.
fn remove_from_index<K>(index: &mut HashMap<K, Vec<TaskId>>, key: K, task_id: TaskId)
where
    K: std::hash::Hash + Eq,
{
    if let Some(ids) = index.get_mut(&key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(&key);
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> RepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(RepositoryError::DuplicateId(task.id().into_inner()));
        }
        index_task(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn replace(&self, task: &Task) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(old_task) = state.tasks.get(&task.id()).cloned() else {
            return Ok(false);
        };

        // Re-point the reference indexes before storing the new record.
        deindex_task(&mut state, &old_task);
        index_task(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(true)
    }

    async fn find_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_project(&self, project_id: ProjectId) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let tasks = state
            .project_index
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn find_any_referencing(
        &self,
        resource_id: ResourceId,
    ) -> RepositoryResult<Option<TaskId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .resource_index
            .get(&resource_id)
            .and_then(|ids| ids.first().copied()))
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(task) = state.tasks.remove(&id) else {
            return Ok(false);
        };
        deindex_task(&mut state, &task);
        Ok(true)
    }

    async fn exists(&self, id: TaskId) -> RepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.contains_key(&id))
    }
}
