//! Task reference checks and denormalized read behaviour.

use super::helpers::{App, app, project_payload, resource_payload, task_payload};
use brunel::domain::ProjectId;
use brunel::services::TaskLinkageError;
use brunel::validation::{TaskPayload, ValidationError};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_against_unresolved_project_persists_nothing(app: App) {
    let phantom = ProjectId::new();
    let result = app
        .tasks
        .create(&task_payload(
            "Pour slab",
            "2025-01-05",
            "2025-01-10",
            phantom,
        ))
        .await;

    assert!(matches!(
        result,
        Err(TaskLinkageError::UnknownProject(id)) if id == phantom
    ));
    let listed = app.tasks.list().await.expect("list tasks");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_end_before_start_persists_nothing(app: App) {
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

    let result = app
        .tasks
        .create(&task_payload(
            "Pour slab",
            "2025-01-10",
            "2025-01-05",
            project.id(),
        ))
        .await;

    assert!(matches!(
        result,
        Err(TaskLinkageError::Validation(
            ValidationError::InvalidValue { field: "endDate", .. }
        ))
    ));
    let listed = app.tasks.list().await.expect("list tasks");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denormalized_view_keeps_resource_declaration_order(app: App) {
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
    let gravel = app
        .resources
        .create(&resource_payload("Gravel", "Material", 200.0))
        .await
        .expect("create gravel");
    let cement = app
        .resources
        .create(&resource_payload("Cement", "Material", 500.0))
        .await
        .expect("create cement");

    let view = app
        .tasks
        .create(&TaskPayload {
            resources: Some(vec![cement.id(), gravel.id()]),
            ..task_payload("Pour slab", "2025-01-05", "2025-01-10", project.id())
        })
        .await
        .expect("create task");

    assert_eq!(view.resources, vec![cement, gravel]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_by_project_returns_only_its_tasks(app: App) {
    let foundation = app
        .projects
        .create(&project_payload(
            "Foundation",
            "2025-01-01",
            "2025-06-01",
            100_000.0,
        ))
        .await
        .expect("create first project");
    let roofing = app
        .projects
        .create(&project_payload(
            "Roofing",
            "2025-06-01",
            "2025-09-01",
            60_000.0,
        ))
        .await
        .expect("create second project");

    app.tasks
        .create(&task_payload(
            "Pour slab",
            "2025-01-05",
            "2025-01-10",
            foundation.id(),
        ))
        .await
        .expect("first task");
    app.tasks
        .create(&task_payload(
            "Install trusses",
            "2025-06-05",
            "2025-06-20",
            roofing.id(),
        ))
        .await
        .expect("second task");

    let foundation_tasks = app
        .tasks
        .list_by_project(foundation.id())
        .await
        .expect("list foundation tasks");
    assert_eq!(foundation_tasks.len(), 1);
    assert_eq!(
        foundation_tasks
            .first()
            .map(|view| view.task.description()),
        Some("Pour slab")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denormalized_view_serialises_in_wire_shape(app: App) {
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
    let cement = app
        .resources
        .create(&resource_payload("Cement", "Material", 500.0))
        .await
        .expect("create resource");

    let view = app
        .tasks
        .create(&TaskPayload {
            resources: Some(vec![cement.id()]),
            ..task_payload("Pour slab", "2025-01-05", "2025-01-10", project.id())
        })
        .await
        .expect("create task");

    let value = serde_json::to_value(&view).expect("serialise view");
    assert_eq!(value["task"]["status"], serde_json::json!("pending"));
    assert_eq!(value["task"]["startDate"], serde_json::json!("2025-01-05"));
    assert_eq!(value["project"]["name"], serde_json::json!("Foundation"));
    assert_eq!(value["resources"][0]["type"], serde_json::json!("Material"));
    assert_eq!(
        value["resources"][0]["supplier"]["name"],
        serde_json::json!("Lafarge")
    );
}
