//! Status grouping of a task snapshot and per-section visibility.

use super::{Task, TaskStatus};

/// A task snapshot partitioned by status.
///
/// Within each group tasks keep the order the store returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupedTasks {
    pending: Vec<Task>,
    in_progress: Vec<Task>,
    completed: Vec<Task>,
}

impl GroupedTasks {
    /// Returns the tasks in `status`.
    #[must_use]
    pub fn get(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Iterates over every group in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }

    /// Returns the total number of grouped tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    /// Returns whether every group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn group_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Pending => &mut self.pending,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Completed => &mut self.completed,
        }
    }
}

/// Partitions `tasks` into one group per status.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> GroupedTasks {
    tasks
        .iter()
        .fold(GroupedTasks::default(), |mut groups, task| {
            groups.group_mut(task.status()).push(task.clone());
            groups
        })
}

/// Expanded/collapsed flag for each status section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pending: bool,
    in_progress: bool,
    completed: bool,
}

impl SectionVisibility {
    /// Returns visibility with every section expanded.
    #[must_use]
    pub const fn all_expanded() -> Self {
        Self {
            pending: true,
            in_progress: true,
            completed: true,
        }
    }

    /// Returns whether the section for `status` is expanded.
    #[must_use]
    pub const fn is_expanded(&self, status: TaskStatus) -> bool {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    /// Flips the section for `status` and returns its new state.
    pub const fn toggle(&mut self, status: TaskStatus) -> bool {
        let flag = match status {
            TaskStatus::Pending => &mut self.pending,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Completed => &mut self.completed,
        };
        *flag = !*flag;
        *flag
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::all_expanded()
    }
}
