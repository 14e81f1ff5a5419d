use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The opposite status (Pending↔Completed)
    pub fn toggled(self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }

    /// Display label as shown in the status badge
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// A task record as held by the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, monotonically assigned, never reused
    pub id: u64,
    /// Never empty/whitespace-only once in the repository
    pub title: String,
    /// Optional free text; empty means "no description"
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    /// Stamped at creation, immutable afterwards (RFC 3339 in serialized form)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a task, detached from the repository until committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// The fixed dataset the app starts with (ids 1–5)
pub fn seed_tasks() -> Vec<Task> {
    serde_json::from_str(include_str!("seed.json")).expect("embedded seed data is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    }

    #[test]
    fn seed_has_five_tasks_in_id_order() {
        let tasks = seed_tasks();
        assert_eq!(tasks.len(), 5);
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn seed_statuses_match_dataset() {
        let tasks = seed_tasks();
        let pending: Vec<u64> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .map(|t| t.id)
            .collect();
        assert_eq!(pending, vec![1, 3, 5]);
    }

    #[test]
    fn seed_timestamps_are_absolute() {
        let tasks = seed_tasks();
        assert_eq!(
            tasks[0].created_at,
            "2025-10-27T10:30:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
