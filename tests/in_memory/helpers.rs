//! Shared test helpers for the in-memory integration suites.

use std::sync::Arc;

use brunel::adapters::memory::{
    InMemoryProjectRepository, InMemoryResourceRepository, InMemoryTaskRepository,
};
use brunel::domain::ProjectId;
use brunel::services::{ProjectLifecycleService, ResourceIntegrityService, TaskLinkageService};
use brunel::validation::{ProjectPayload, ResourcePayload, TaskPayload};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::json;

/// Project service wired to the shared in-memory store.
pub type Projects = ProjectLifecycleService<InMemoryProjectRepository, DefaultClock>;

/// Task service wired to the shared in-memory store.
pub type Tasks = TaskLinkageService<
    InMemoryProjectRepository,
    InMemoryTaskRepository,
    InMemoryResourceRepository,
    DefaultClock,
>;

/// Resource service wired to the shared in-memory store.
pub type Resources =
    ResourceIntegrityService<InMemoryResourceRepository, InMemoryTaskRepository, DefaultClock>;

/// The three services sharing one logical store, as the request handlers
/// see them.
pub struct App {
    /// Project lifecycle operations.
    pub projects: Projects,
    /// Task linkage operations.
    pub tasks: Tasks,
    /// Resource integrity operations.
    pub resources: Resources,
}

/// Provides a fresh application wiring for each test.
#[fixture]
pub fn app() -> App {
    let project_store = Arc::new(InMemoryProjectRepository::new());
    let task_store = Arc::new(InMemoryTaskRepository::new());
    let resource_store = Arc::new(InMemoryResourceRepository::new());
    let clock = Arc::new(DefaultClock);

    App {
        projects: ProjectLifecycleService::new(Arc::clone(&project_store), Arc::clone(&clock)),
        tasks: TaskLinkageService::new(
            Arc::clone(&project_store),
            Arc::clone(&task_store),
            Arc::clone(&resource_store),
            Arc::clone(&clock),
        ),
        resources: ResourceIntegrityService::new(resource_store, task_store, clock),
    }
}

/// Builds a project payload from its wire representation.
pub fn project_payload(name: &str, start: &str, end: &str, budget: f64) -> ProjectPayload {
    serde_json::from_value(json!({
        "name": name,
        "description": "Scenario project",
        "startDate": start,
        "endDate": end,
        "budget": budget,
    }))
    .expect("project payload")
}

/// Builds a task payload from its wire representation.
pub fn task_payload(
    description: &str,
    start: &str,
    end: &str,
    project_id: ProjectId,
) -> TaskPayload {
    serde_json::from_value(json!({
        "description": description,
        "startDate": start,
        "endDate": end,
        "projectId": project_id,
    }))
    .expect("task payload")
}

/// Builds a resource payload from its wire representation.
pub fn resource_payload(name: &str, kind: &str, quantity: f64) -> ResourcePayload {
    serde_json::from_value(json!({
        "name": name,
        "type": kind,
        "quantity": quantity,
        "supplier": {
            "name": "Lafarge",
            "contact": "+33 1 44 34 11 11",
        },
    }))
    .expect("resource payload")
}
