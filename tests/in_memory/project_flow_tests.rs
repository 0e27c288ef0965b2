//! Project CRUD flows, including the unconditional-delete rule.

use super::helpers::{App, app, project_payload, task_payload};
use brunel::services::{ProjectLifecycleError, TaskLinkageError};
use brunel::validation::ProjectPayload;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foundation_scenario_resolves_task_to_its_project(app: App) {
    let project = app
        .projects
        .create(&project_payload(
            "Foundation",
            "2025-01-01",
            "2025-06-01",
            100_000.0,
        ))
        .await
        .expect("create project");

    let view = app
        .tasks
        .create(&task_payload(
            "Pour slab",
            "2025-01-05",
            "2025-01-10",
            project.id(),
        ))
        .await
        .expect("create task");

    assert_eq!(view.task.project_id(), project.id());
    assert_eq!(view.project.as_ref(), Some(&project));
    assert_eq!(view.project.as_ref().map(brunel::domain::Project::name), Some("Foundation"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_update_list_delete(app: App) {
    let created = app
        .projects
        .create(&project_payload(
            "Foundation",
            "2025-01-01",
            "2025-06-01",
            100_000.0,
        ))
        .await
        .expect("create project");

    let updated = app
        .projects
        .update(
            created.id(),
            &ProjectPayload {
                budget: Some(125_000.0),
                ..ProjectPayload::default()
            },
        )
        .await
        .expect("update project");
    assert_eq!(updated.budget(), 125_000.0);
    assert_eq!(updated.name(), "Foundation");

    let listed = app.projects.list().await.expect("list projects");
    assert_eq!(listed.len(), 1);

    app.projects.delete(created.id()).await.expect("delete project");
    let second = app.projects.delete(created.id()).await;
    assert!(matches!(
        second,
        Err(ProjectLifecycleError::NotFound(id)) if id == created.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_deletion_ignores_attached_tasks(app: App) {
    let project = app
        .projects
        .create(&project_payload(
            "Foundation",
            "2025-01-01",
            "2025-06-01",
            100_000.0,
        ))
        .await
        .expect("create project");
    let view = app
        .tasks
        .create(&task_payload(
            "Pour slab",
            "2025-01-05",
            "2025-01-10",
            project.id(),
        ))
        .await
        .expect("create task");

    // No referencing-task guard on project deletion; the task is left
    // holding a reference that no longer resolves.
    app.projects.delete(project.id()).await.expect("delete project");

    let fetched = app.tasks.get(view.task.id()).await.expect("get task");
    assert_eq!(fetched.task.project_id(), project.id());
    assert!(fetched.project.is_none());

    let by_project = app.tasks.list_by_project(project.id()).await;
    assert!(matches!(
        by_project,
        Err(TaskLinkageError::ProjectNotFound(id)) if id == project.id()
    ));
}
