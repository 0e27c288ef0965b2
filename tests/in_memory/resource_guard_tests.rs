//! The resource-in-use deletion guard, end to end.

use super::helpers::{App, app, project_payload, resource_payload, task_payload};
use brunel::services::ResourceIntegrityError;
use brunel::validation::TaskPayload;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cement_scenario_blocks_then_allows_deletion(app: App) {
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

    let blocked = app.resources.delete(cement.id()).await;
    assert!(matches!(
        blocked,
        Err(ResourceIntegrityError::InUse { resource, task })
            if resource == cement.id() && task == view.task.id()
    ));

    // The resource survives the blocked attempt.
    let fetched = app.resources.get(cement.id()).await.expect("get resource");
    assert_eq!(fetched.name(), "Cement");

    app.tasks.delete(view.task.id()).await.expect("delete task");
    app.resources
        .delete(cement.id())
        .await
        .expect("retry delete");

    let gone = app.resources.get(cement.id()).await;
    assert!(matches!(
        gone,
        Err(ResourceIntegrityError::NotFound(id)) if id == cement.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreferenced_resource_deletes_once_then_reports_not_found(app: App) {
    let cement = app
        .resources
        .create(&resource_payload("Cement", "Material", 500.0))
        .await
        .expect("create resource");

    app.resources
        .delete(cement.id())
        .await
        .expect("first delete");
    let second = app.resources.delete(cement.id()).await;

    assert!(matches!(
        second,
        Err(ResourceIntegrityError::NotFound(id)) if id == cement.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn guard_considers_every_task_holding_the_reference(app: App) {
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

    let first = app
        .tasks
        .create(&TaskPayload {
            resources: Some(vec![cement.id()]),
            ..task_payload("Pour slab", "2025-01-05", "2025-01-10", project.id())
        })
        .await
        .expect("first task");
    let second = app
        .tasks
        .create(&TaskPayload {
            resources: Some(vec![cement.id()]),
            ..task_payload("Pour footings", "2025-01-12", "2025-01-20", project.id())
        })
        .await
        .expect("second task");

    // Removing one referencing task is not enough.
    app.tasks.delete(first.task.id()).await.expect("delete first task");
    let still_blocked = app.resources.delete(cement.id()).await;
    assert!(matches!(
        still_blocked,
        Err(ResourceIntegrityError::InUse { task, .. }) if task == second.task.id()
    ));

    app.tasks
        .delete(second.task.id())
        .await
        .expect("delete second task");
    app.resources
        .delete(cement.id())
        .await
        .expect("final delete");
}
