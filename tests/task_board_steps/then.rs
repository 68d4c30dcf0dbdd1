//! Then steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::task::services::ActionOutcome;

fn last_outcome(world: &TaskBoardWorld) -> Result<&ActionOutcome, eyre::Report> {
    world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no action was taken in this scenario"))
}

#[then("the action is applied")]
fn action_applied(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        *outcome == ActionOutcome::Applied,
        "expected the action to be applied, got {outcome:?}"
    );
    Ok(())
}

#[then("the action is ignored")]
fn action_ignored(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    eyre::ensure!(
        *outcome == ActionOutcome::Ignored,
        "expected the action to be ignored, got {outcome:?}"
    );
    Ok(())
}

#[then("the board shows {count:usize} tasks")]
fn board_shows(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.controller.group_by_status().len();
    eyre::ensure!(shown == count, "expected {count} tasks, board shows {shown}");
    Ok(())
}

#[then(r#"the "{status}" section lists "{title}""#)]
fn section_lists(
    world: &TaskBoardWorld,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let groups = world.controller.group_by_status();
    eyre::ensure!(
        groups.get(expected).iter().any(|task| task.title() == title),
        "{title:?} is not listed under {expected}"
    );
    Ok(())
}

#[then(r#"the "{status}" section is empty"#)]
fn section_empty(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let groups = world.controller.group_by_status();
    let listed = groups.get(expected).len();
    eyre::ensure!(listed == 0, "{expected} still lists {listed} tasks");
    Ok(())
}

#[then(r#"the validation message is "{message}""#)]
fn validation_message(world: &TaskBoardWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world
        .controller
        .validation_error()
        .ok_or_else(|| eyre::eyre!("no validation message is shown"))?
        .to_string();
    eyre::ensure!(shown == message, "expected {message:?}, shown {shown:?}");
    Ok(())
}

#[then(r#"the transport message is "{message}""#)]
fn transport_message(world: &TaskBoardWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world
        .controller
        .transport_error()
        .ok_or_else(|| eyre::eyre!("no transport message is shown"))?
        .message();
    eyre::ensure!(shown == message, "expected {message:?}, shown {shown:?}");
    Ok(())
}

#[then("no change was sent to the task service")]
fn no_change_sent(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let sent = world
        .store
        .call_counts()
        .mutations()
        .saturating_sub(world.mutations_before_action);
    eyre::ensure!(sent == 0, "{sent} writes reached the task service");
    Ok(())
}

#[then("the edit is still open")]
fn edit_open(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.controller.pending_edit().is_some(),
        "the edit was closed"
    );
    Ok(())
}

#[then("the edit is closed")]
fn edit_closed(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.controller.pending_edit().is_none(),
        "an edit is still open"
    );
    Ok(())
}

#[then("the edit keeps the typed values")]
fn edit_keeps_typed_values(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let edit = world
        .controller
        .pending_edit()
        .ok_or_else(|| eyre::eyre!("the edit was closed"))?;
    for (field, typed) in &world.typed_fields {
        let shown = edit.overlay().field(*field);
        eyre::ensure!(
            shown == typed,
            "{field:?} shows {shown:?}, expected the typed {typed:?}"
        );
    }
    Ok(())
}
