use chrono::{DateTime, Utc};

use crate::model::task::{Task, TaskDraft, seed_tasks};

/// Error type for repository operations. A stale id yields NotFound and
/// leaves the list untouched.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("task not found: {0}")]
    NotFound(u64),
}

/// The authoritative in-memory task list plus the identifier allocator.
/// New tasks go to the front; update/toggle preserve position; ids are
/// never reused.
#[derive(Debug, Clone)]
pub struct TaskRepo {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskRepo {
    /// Build a repository over an existing dataset. The allocator starts
    /// one above the highest id present.
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        TaskRepo { tasks, next_id }
    }

    /// The fixed five-task starting dataset (allocator at 6)
    pub fn seeded() -> Self {
        TaskRepo::new(seed_tasks())
    }

    /// Ordered read-only snapshot
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Construct a task from a valid draft and prepend it. Validation
    /// happens upstream in the form session, so this never fails.
    pub fn add(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> &Task {
        let task = Task {
            id: self.next_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            created_at: now,
        };
        self.next_id += 1;
        self.tasks.insert(0, task);
        &self.tasks[0]
    }

    /// Replace the editable fields of the task with `id` in place,
    /// preserving id, created_at, and position.
    pub fn update(&mut self, id: u64, draft: TaskDraft) -> Result<&Task, RepoError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepoError::NotFound(id))?;
        task.title = draft.title;
        task.description = draft.description;
        task.status = draft.status;
        Ok(task)
    }

    /// Permanently delete the task with `id`
    pub fn remove(&mut self, id: u64) -> Result<Task, RepoError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(RepoError::NotFound(id))?;
        Ok(self.tasks.remove(pos))
    }

    /// Flip Pending↔Completed, all other fields untouched
    pub fn toggle_status(&mut self, id: u64) -> Result<&Task, RepoError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepoError::NotFound(id))?;
        task.status = task.status.toggled();
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskStatus;
    use pretty_assertions::assert_eq;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn add_prepends_and_allocates_from_six() {
        let mut repo = TaskRepo::seeded();
        let before = repo.len();
        let id = repo.add(draft("Write tests"), Utc::now()).id;
        assert_eq!(id, 6);
        assert_eq!(repo.len(), before + 1);
        assert_eq!(repo.tasks()[0].id, 6);
    }

    #[test]
    fn ids_are_never_reused_after_remove() {
        let mut repo = TaskRepo::seeded();
        let a = repo.add(draft("a"), Utc::now()).id;
        repo.remove(a).unwrap();
        let b = repo.add(draft("b"), Utc::now()).id;
        assert!(b > a);
    }

    #[test]
    fn update_preserves_id_created_at_and_position() {
        let mut repo = TaskRepo::seeded();
        let original = repo.tasks()[2].clone();
        let updated = repo
            .update(
                original.id,
                TaskDraft {
                    title: "Renamed".to_string(),
                    description: "new text".to_string(),
                    status: TaskStatus::Completed,
                },
            )
            .unwrap()
            .clone();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(repo.tasks()[2].title, "Renamed");
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut repo = TaskRepo::seeded();
        let original = repo.tasks()[0].clone();
        repo.toggle_status(original.id).unwrap();
        assert_eq!(
            repo.get(original.id).unwrap().status,
            original.status.toggled()
        );
        repo.toggle_status(original.id).unwrap();
        assert_eq!(repo.get(original.id).unwrap(), &original);
    }

    #[test]
    fn remove_deletes_only_the_target() {
        let mut repo = TaskRepo::seeded();
        let removed = repo.remove(3).unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(repo.len(), 4);
        assert!(repo.get(3).is_none());
        assert!(repo.get(2).is_some());
    }

    #[test]
    fn stale_ids_are_errors_and_leave_state_unchanged() {
        let mut repo = TaskRepo::seeded();
        let snapshot = repo.tasks().to_vec();
        assert!(matches!(repo.update(99, draft("x")), Err(RepoError::NotFound(99))));
        assert!(matches!(repo.remove(99), Err(RepoError::NotFound(99))));
        assert!(matches!(repo.toggle_status(99), Err(RepoError::NotFound(99))));
        assert_eq!(repo.tasks(), &snapshot[..]);
    }

    #[test]
    fn empty_repo_allocates_from_one() {
        let mut repo = TaskRepo::new(Vec::new());
        assert!(repo.is_empty());
        assert_eq!(repo.add(draft("first"), Utc::now()).id, 1);
    }
}
