use std::collections::HashMap;

use crate::model::task::{Task, TaskDraft, TaskStatus};

/// A form field, used as the key for focus and validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Status,
}

impl FormField {
    /// Focus order in the modal: Title → Description → Status
    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    pub fn prev(self) -> FormField {
        self.next().next()
    }
}

/// Transient editable draft for the add/edit modal, detached from the
/// repository until submit hands a draft back to the orchestrator.
#[derive(Debug, Clone)]
pub struct FormSession {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// The task being edited; None means creating a new one
    pub editing: Option<u64>,
    errors: HashMap<FormField, String>,
}

impl FormSession {
    /// Fresh draft for a new task
    pub fn blank() -> Self {
        FormSession {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::Pending,
            editing: None,
            errors: HashMap::new(),
        }
    }

    /// Draft seeded from an existing task's editable fields
    pub fn for_task(task: &Task) -> Self {
        FormSession {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            editing: Some(task.id),
            errors: HashMap::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Replace a field's value wholesale. Clears any stored error on that
    /// field; errors are only re-evaluated at submit.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Title => self.title = value.to_string(),
            FormField::Description => self.description = value.to_string(),
            FormField::Status => {}
        }
        self.edited(field);
    }

    /// Mark a field as touched by the user, clearing its error immediately
    pub fn edited(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// One rule: the trimmed title must be non-empty. Description is never
    /// validated; empty is valid and stored as-is.
    pub fn validate(&self) -> HashMap<FormField, String> {
        let mut errors = HashMap::new();
        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Title is required".to_string());
        }
        errors
    }

    /// Run validation; on success hand the draft to the caller for the
    /// repository commit, otherwise store the errors and return None.
    pub fn submit(&mut self) -> Option<TaskDraft> {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        Some(TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_session_defaults_to_pending() {
        let session = FormSession::blank();
        assert_eq!(session.title, "");
        assert_eq!(session.description, "");
        assert_eq!(session.status, TaskStatus::Pending);
        assert!(!session.is_edit());
    }

    #[test]
    fn for_task_copies_editable_fields() {
        let task = Task {
            id: 7,
            title: "Ship it".to_string(),
            description: "soon".to_string(),
            status: TaskStatus::Completed,
            created_at: Utc::now(),
        };
        let session = FormSession::for_task(&task);
        assert_eq!(session.title, "Ship it");
        assert_eq!(session.editing, Some(7));
        assert_eq!(session.status, TaskStatus::Completed);
    }

    #[test]
    fn whitespace_title_fails_submit() {
        let mut session = FormSession::blank();
        session.set_field(FormField::Title, "   ");
        assert!(session.submit().is_none());
        assert_eq!(session.error(FormField::Title), Some("Title is required"));
    }

    #[test]
    fn editing_the_field_clears_its_error() {
        let mut session = FormSession::blank();
        assert!(session.submit().is_none());
        assert!(session.error(FormField::Title).is_some());

        session.set_field(FormField::Title, "T");
        assert!(session.error(FormField::Title).is_none());
    }

    #[test]
    fn editing_another_field_keeps_the_title_error() {
        let mut session = FormSession::blank();
        assert!(session.submit().is_none());
        session.set_field(FormField::Description, "notes");
        assert!(session.error(FormField::Title).is_some());
    }

    #[test]
    fn empty_description_is_valid_and_stored_raw() {
        let mut session = FormSession::blank();
        session.set_field(FormField::Title, "Only a title");
        let draft = session.submit().unwrap();
        assert_eq!(draft.description, "");
    }

    #[test]
    fn submit_keeps_title_as_typed() {
        let mut session = FormSession::blank();
        session.set_field(FormField::Title, "  padded  ");
        let draft = session.submit().unwrap();
        assert_eq!(draft.title, "  padded  ");
    }
}
