//! End-to-end board flows through the lifecycle controller.

use super::helpers::{FUTURE_DUE, controller_for, due, seeded_store, store, task_id};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{EditField, StatusSelection, TaskStatus},
    services::{ActionOutcome, FetchOutcome, TaskForm},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_appears_after_refetch(store: InMemoryTaskStore) {
    let controller = controller_for(&store);
    controller.fetch_all().await;
    let mut form = TaskForm {
        title: "Renew passport".to_owned(),
        due_date_time: FUTURE_DUE.to_owned(),
        ..TaskForm::default()
    };

    form.submit(&store, &DefaultClock).await.expect("create task");
    assert!(controller.tasks().is_empty());
    let outcome = controller.fetch_all().await;

    assert_eq!(outcome, FetchOutcome::Replaced { tasks: 1 });
    let pending = controller.group_by_status();
    let titles: Vec<&str> = pending
        .get(TaskStatus::Pending)
        .iter()
        .map(|task| task.title())
        .collect();
    assert_eq!(titles, ["Renew passport"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_walks_the_whole_lifecycle(seeded_store: InMemoryTaskStore) {
    let controller = controller_for(&seeded_store);
    controller.fetch_all().await;
    let id = task_id(1).expect("id");

    let steps = [TaskStatus::InProgress, TaskStatus::Completed, TaskStatus::InProgress];
    for target in steps {
        let outcome = controller
            .change_status(id, StatusSelection::Target(target))
            .await;
        assert_eq!(outcome, ActionOutcome::Applied, "move to {target}");
    }

    let in_progress = controller.group_by_status();
    assert!(in_progress.get(TaskStatus::InProgress).iter().any(|task| task.id() == id));
    assert_eq!(seeded_store.call_counts().update_task_status, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_write_is_followed_by_one_fetch(seeded_store: InMemoryTaskStore) {
    let controller = controller_for(&seeded_store);
    controller.fetch_all().await;

    controller
        .change_status(task_id(1).expect("id"), StatusSelection::Target(TaskStatus::InProgress))
        .await;
    controller.delete_task(task_id(3).expect("id")).await;

    let calls = seeded_store.call_counts();
    assert_eq!(calls.mutations(), 2);
    assert_eq!(calls.list_tasks, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_then_save_changes_only_the_edited_task(seeded_store: InMemoryTaskStore) {
    let controller = controller_for(&seeded_store);
    controller.fetch_all().await;
    let target = controller
        .tasks()
        .into_iter()
        .find(|task| task.id().value() == 3)
        .expect("task 3");
    let untouched = controller
        .tasks()
        .into_iter()
        .find(|task| task.id().value() == 1)
        .expect("task 1");

    controller.begin_edit(&target);
    controller.update_edit_field(EditField::Description, "Scan receipts first");
    controller.update_edit_field(EditField::DueDateTime, "2099-04-15T17:00");
    let outcome = controller.save_edit(target.id()).await;

    assert_eq!(outcome, ActionOutcome::Applied);
    let view = controller.view();
    assert_eq!(view.pending_edit, None);
    let saved = view
        .groups
        .get(TaskStatus::Completed)
        .first()
        .cloned()
        .expect("completed task");
    assert_eq!(saved.description(), Some("Scan receipts first"));
    assert_eq!(saved.due_date_time(), due("2099-04-15T17:00").expect("due"));
    assert!(controller.tasks().contains(&untouched));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outage_surfaces_a_notice_and_recovery_clears_it(seeded_store: InMemoryTaskStore) {
    let controller = controller_for(&seeded_store);
    controller.fetch_all().await;
    seeded_store.set_unreachable(true);

    let outcome = controller.delete_task(task_id(1).expect("id")).await;

    assert_eq!(outcome, ActionOutcome::TransportFailed);
    assert_eq!(
        controller.view().transport_error.map(|notice| notice.message()),
        Some("Unable to delete the task. Please try again.")
    );
    assert_eq!(controller.tasks().len(), 3);

    seeded_store.set_unreachable(false);
    assert_eq!(
        controller.delete_task(task_id(1).expect("id")).await,
        ActionOutcome::Applied
    );
    assert_eq!(controller.transport_error(), None);
    assert_eq!(controller.tasks().len(), 2);
}
