//! Edit validation rules.
//!
//! Each rule is a pure function over the typed text of one field. Rules run
//! in a fixed order at save time and the first failure is reported; nothing
//! here blocks typing.

use super::{DueDateTime, EditOverlay, EditValidationError, TaskUpdate};
use chrono::NaiveDateTime;
use mockable::Clock;

/// Validates that the title is not blank.
///
/// # Errors
///
/// Returns [`EditValidationError::BlankTitle`] when the trimmed title is
/// empty.
pub fn validate_title(title: &str) -> Result<(), EditValidationError> {
    if title.trim().is_empty() {
        return Err(EditValidationError::BlankTitle);
    }
    Ok(())
}

/// Validates that the due timestamp is present, parseable, and strictly
/// after `now`.
///
/// # Errors
///
/// Returns [`EditValidationError::MissingDueDateTime`] for blank input,
/// [`EditValidationError::UnparseableDueDateTime`] when the text is not an
/// ISO-local timestamp, and [`EditValidationError::DueDateTimeNotInFuture`]
/// when the timestamp is at or before `now`.
pub fn validate_due_date_time(
    raw: &str,
    now: NaiveDateTime,
) -> Result<DueDateTime, EditValidationError> {
    if raw.trim().is_empty() {
        return Err(EditValidationError::MissingDueDateTime);
    }
    let due: DueDateTime = raw
        .parse()
        .map_err(|_| EditValidationError::UnparseableDueDateTime(raw.to_owned()))?;
    if !due.is_after(now) {
        return Err(EditValidationError::DueDateTimeNotInFuture);
    }
    Ok(due)
}

/// Runs every edit rule against `overlay`, title first.
///
/// "Now" is read from `clock` once, at the moment of validation.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_edit(
    overlay: &EditOverlay,
    clock: &impl Clock,
) -> Result<TaskUpdate, EditValidationError> {
    validate_title(&overlay.title)?;
    let due_date_time = validate_due_date_time(&overlay.due_date_time, now_local(clock))?;
    let description = Some(overlay.description.as_str())
        .filter(|text| !text.trim().is_empty())
        .map(str::to_owned);

    Ok(TaskUpdate {
        title: overlay.title.clone(),
        description,
        due_date_time,
    })
}

/// Returns the clock's local wall time without an offset.
pub(crate) fn now_local(clock: &impl Clock) -> NaiveDateTime {
    clock.local().naive_local()
}
