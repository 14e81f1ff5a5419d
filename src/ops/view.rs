use serde::{Deserialize, Serialize};

use crate::model::task::{Task, TaskStatus};

/// Status selector for the task table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Whether a task with `status` passes this filter
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::Completed => status == TaskStatus::Completed,
        }
    }

    /// Cycle order used by the `f` key: All → Pending → Completed → All
    pub fn next(self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Pending,
            StatusFilter::Pending => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }
}

/// Aggregate counts, always over the unfiltered repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

pub fn counts(tasks: &[Task]) -> TaskCounts {
    let completed = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .count();
    TaskCounts {
        total: tasks.len(),
        pending: tasks.len() - completed,
        completed,
    }
}

/// The filtered/searched projection of the repository, in repository order.
/// Status filter applies first, then the case-insensitive substring match of
/// the trimmed query against the title.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: StatusFilter, query: &str) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t.status)).collect();

    let query = query.trim();
    if !query.is_empty() {
        let needle = query.to_lowercase();
        visible.retain(|t| t.title.to_lowercase().contains(&needle));
    }

    visible
}
