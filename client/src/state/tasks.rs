//! Dashboard task-list view model.
//!
//! DESIGN
//! ======
//! Tasks themselves come straight from `myTasks`; this module only derives
//! what the dashboard shows from them (filtering, counts, labels), so the page
//! component stays a thin view.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{Task, TaskStatus};

/// Dashboard filter and modal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub show_completed: bool,
    pub editor: TaskEditor,
}

/// Which task form (if any) is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TaskEditor {
    #[default]
    Closed,
    Create,
    Edit(Task),
}

impl TaskEditor {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Task being edited, if the form is in edit mode.
    pub fn task(&self) -> Option<&Task> {
        match self {
            Self::Edit(task) => Some(task),
            _ => None,
        }
    }
}

impl DashboardState {
    pub fn heading(&self) -> &'static str {
        if self.show_completed { "All Tasks" } else { "Active Tasks" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_completed { "Hide Completed" } else { "Show Completed" }
    }
}

/// Tasks shown for the current filter; completed tasks are hidden unless
/// `show_completed` is set.
pub fn visible_tasks(tasks: &[Task], show_completed: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| show_completed || !t.status.is_completed())
        .cloned()
        .collect()
}

/// Header line under the dashboard title.
pub fn remaining_label(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{count} {noun} to complete")
}

/// Per-status counts for the stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            stats
        })
    }
}
