//! In-memory store behaviour at the port boundary.

use super::helpers::{draft, seeded_store, store, task_id};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{TaskStatus, TaskUpdate},
    ports::{RemoteTaskStore, TaskStoreError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_assigned_in_order_and_never_reused(store: InMemoryTaskStore) {
    let first = store
        .create_task(draft("One", TaskStatus::Pending).expect("draft"))
        .await
        .expect("create first");
    store.delete_task(first.id()).await.expect("delete first");
    let second = store
        .create_task(draft("Two", TaskStatus::Pending).expect("draft"))
        .await
        .expect("create second");

    assert_eq!(first.id().value(), 1);
    assert_eq!(second.id().value(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_by_status_filters_in_insertion_order(seeded_store: InMemoryTaskStore) {
    seeded_store
        .create_task(draft("Buy milk", TaskStatus::Pending).expect("draft"))
        .await
        .expect("create");

    let pending = seeded_store
        .list_tasks_by_status(TaskStatus::Pending)
        .await
        .expect("list pending");

    let titles: Vec<&str> = pending.iter().map(|task| task.title()).collect();
    assert_eq!(titles, ["Pay rent", "Buy milk"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_returns_none_for_unknown_ids(seeded_store: InMemoryTaskStore) {
    let found = seeded_store
        .get_task(task_id(2).expect("id"))
        .await
        .expect("lookup");
    let missing = seeded_store
        .get_task(task_id(50).expect("id"))
        .await
        .expect("lookup");

    assert_eq!(found.map(|task| task.title().to_owned()), Some("Write report".to_owned()));
    assert_eq!(missing, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_editable_fields_and_keeps_status(seeded_store: InMemoryTaskStore) {
    let id = task_id(2).expect("id");
    let update = TaskUpdate {
        title: "Write final report".to_owned(),
        description: None,
        due_date_time: "2099-09-09T09:09".parse().expect("due"),
    };

    let updated = seeded_store.update_task(id, update).await.expect("update");

    assert_eq!(updated.title(), "Write final report");
    assert_eq!(updated.status(), TaskStatus::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn writes_to_unknown_ids_report_not_found(seeded_store: InMemoryTaskStore) {
    let id = task_id(9).expect("id");

    let status = seeded_store
        .update_task_status(id, TaskStatus::Completed)
        .await;
    let deleted = seeded_store.delete_task(id).await;

    assert!(matches!(status, Err(TaskStoreError::NotFound(missing)) if missing == id));
    assert!(matches!(deleted, Err(TaskStoreError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_store_fails_and_still_counts_calls(seeded_store: InMemoryTaskStore) {
    seeded_store.set_unreachable(true);

    let result = seeded_store.list_tasks().await;

    assert!(matches!(result, Err(TaskStoreError::Unavailable(_))));
    assert_eq!(seeded_store.call_counts().list_tasks, 1);
    assert_eq!(seeded_store.snapshot().len(), 3);
}
