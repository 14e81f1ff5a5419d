use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::io::config_io;
use crate::model::{AppConfig, Task, TaskDraft, TaskStatus};
use crate::ops::form::{FormField, FormSession};
use crate::ops::repo::TaskRepo;
use crate::ops::view::{self, StatusFilter, TaskCounts};

use super::input;
use super::notify::{Severity, ToastQueue};
use super::render;
use super::theme::Theme;

/// Current interaction mode when no modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// A validated draft waiting out the simulated save latency. The commit
/// happens in `App::tick` once the deadline passes; there is no cancellation.
#[derive(Debug, Clone)]
pub struct PendingSave {
    pub draft: TaskDraft,
    pub deadline: Instant,
}

/// State of the add/edit modal
#[derive(Debug)]
pub struct FormModal {
    pub session: FormSession,
    pub focus: FormField,
    /// Byte offset of the cursor within the focused text field
    pub cursor: usize,
    /// Some while the simulated save is in flight; form input is ignored
    pub saving: Option<PendingSave>,
}

impl FormModal {
    pub fn add() -> Self {
        FormModal {
            session: FormSession::blank(),
            focus: FormField::Title,
            cursor: 0,
            saving: None,
        }
    }

    pub fn edit(task: &Task) -> Self {
        let session = FormSession::for_task(task);
        let cursor = session.title.len();
        FormModal {
            session,
            focus: FormField::Title,
            cursor,
            saving: None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    /// The focused field's text buffer, None when Status is focused
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            FormField::Title => Some(&self.session.title),
            FormField::Description => Some(&self.session.description),
            FormField::Status => None,
        }
    }

    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.session.title),
            FormField::Description => Some(&mut self.session.description),
            FormField::Status => None,
        }
    }

    /// Move focus, snapping the cursor to the end of the newly focused field
    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
        self.cursor = self.focused_text().map_or(0, str::len);
    }
}

/// Which overlay owns the input. A single tagged enum so that two modals
/// can never be open at once.
#[derive(Debug)]
pub enum Modal {
    None,
    Form(FormModal),
    /// Pending delete confirmation; a newer request overwrites this
    ConfirmDelete { task_id: u64, title: String },
}

impl Modal {
    pub fn is_none(&self) -> bool {
        matches!(self, Modal::None)
    }
}

/// Main application state
pub struct App {
    pub repo: TaskRepo,
    pub filter: StatusFilter,
    /// Live search query; filters the table on every keystroke
    pub search_input: String,
    /// Query to restore when Esc cancels search entry
    pub search_prev: Option<String>,
    pub mode: Mode,
    pub modal: Modal,
    pub toasts: ToastQueue,
    /// Cursor index into the visible (filtered) task list
    pub cursor: usize,
    /// First visible table row
    pub scroll_offset: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    save_delay: Duration,
}

impl App {
    pub fn new(repo: TaskRepo, config: &AppConfig, filter: StatusFilter) -> Self {
        App {
            repo,
            filter,
            search_input: String::new(),
            search_prev: None,
            mode: Mode::Navigate,
            modal: Modal::None,
            toasts: ToastQueue::new(Duration::from_millis(config.timing.toast_ms)),
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            save_delay: Duration::from_millis(config.timing.save_delay_ms),
        }
    }

    /// The filtered/searched projection, in repository order
    pub fn visible(&self) -> Vec<&Task> {
        view::visible_tasks(self.repo.tasks(), self.filter, &self.search_input)
    }

    /// Aggregate counts over the unfiltered repository
    pub fn counts(&self) -> TaskCounts {
        view::counts(self.repo.tasks())
    }

    /// The task under the cursor, if any row is visible
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().get(self.cursor).copied()
    }

    /// Keep the cursor on a valid row after mutations or filter changes
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(len - 1);
        }
    }

    /// Regex for highlighting search matches in titles. Case-insensitive,
    /// literal (the query is escaped).
    pub fn search_re(&self) -> Option<Regex> {
        let query = self.search_input.trim();
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    pub fn push_toast(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.push(message, severity);
    }

    // -----------------------------------------------------------------------
    // Orchestrator transitions

    /// Open the add modal with a blank draft. Ignored while any modal is open.
    pub fn open_add_form(&mut self) {
        if self.modal.is_none() {
            self.modal = Modal::Form(FormModal::add());
        }
    }

    /// Open the edit modal with a copy of the task's editable fields.
    /// Ignored while any modal is open.
    pub fn open_edit_form(&mut self, id: u64) {
        if !self.modal.is_none() {
            return;
        }
        if let Some(task) = self.repo.get(id) {
            self.modal = Modal::Form(FormModal::edit(task));
        }
    }

    /// Set the pending delete confirmation. A request while one is already
    /// pending overwrites it (last request wins); suppressed while the
    /// add/edit form is open.
    pub fn request_delete(&mut self, id: u64) {
        if matches!(self.modal, Modal::Form(_)) {
            return;
        }
        if let Some(task) = self.repo.get(id) {
            self.modal = Modal::ConfirmDelete {
                task_id: id,
                title: task.title.clone(),
            };
        }
    }

    /// Confirm the pending delete: remove the task and close the gate
    pub fn confirm_delete(&mut self) {
        let Modal::ConfirmDelete { task_id, .. } = std::mem::replace(&mut self.modal, Modal::None)
        else {
            return;
        };
        match self.repo.remove(task_id) {
            Ok(_) => self.push_toast("Task deleted successfully!", Severity::Success),
            Err(e) => self.push_toast(e.to_string(), Severity::Error),
        }
        self.clamp_cursor();
    }

    /// Close the open modal and discard its draft. Rejected while the save
    /// is in flight — a submitted save always completes.
    pub fn cancel_modal(&mut self) {
        if let Modal::Form(form) = &self.modal
            && form.is_saving()
        {
            return;
        }
        self.modal = Modal::None;
    }

    /// Flip a task's status immediately, no modal involved
    pub fn toggle_task(&mut self, id: u64) {
        match self.repo.toggle_status(id) {
            Ok(task) => {
                let message = match task.status {
                    TaskStatus::Completed => "Task marked as Completed!",
                    TaskStatus::Pending => "Task marked as Pending!",
                };
                self.push_toast(message, Severity::Success);
            }
            Err(e) => self.push_toast(e.to_string(), Severity::Error),
        }
        self.clamp_cursor();
    }

    /// Submit the form: validation errors keep the modal open; a valid
    /// draft enters the saving state and commits at the deadline.
    pub fn submit_form(&mut self, now: Instant) {
        let Modal::Form(form) = &mut self.modal else {
            return;
        };
        if form.is_saving() {
            return;
        }
        if let Some(draft) = form.session.submit() {
            form.saving = Some(PendingSave {
                draft,
                deadline: now + self.save_delay,
            });
        }
    }

    /// Advance timers: expire toasts and complete a due save. Called every
    /// event-loop iteration; all timer-driven mutations funnel through here.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.expire(now);

        let save_due = matches!(
            &self.modal,
            Modal::Form(form) if form.saving.as_ref().is_some_and(|p| p.deadline <= now)
        );
        if !save_due {
            return;
        }

        let Modal::Form(form) = std::mem::replace(&mut self.modal, Modal::None) else {
            return;
        };
        let Some(pending) = form.saving else {
            return;
        };
        match form.session.editing {
            None => {
                self.repo.add(pending.draft, Utc::now());
                self.push_toast("Task added successfully!", Severity::Success);
            }
            Some(id) => match self.repo.update(id, pending.draft) {
                Ok(_) => self.push_toast("Task updated successfully!", Severity::Success),
                Err(e) => self.push_toast(e.to_string(), Severity::Error),
            },
        }
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(
    filter: StatusFilter,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config: AppConfig = config_io::load_config(config_path)?;
    let mut app = App::new(TaskRepo::seeded(), &config, filter);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll keeps toast expiry and the save deadline responsive
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
