use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::view::StatusFilter;

use super::super::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let len = app.visible().len();
            if len > 0 && app.cursor < len - 1 {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.visible().len().saturating_sub(1);
        }

        // Add / edit / delete / toggle
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.open_add_form();
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) | (_, KeyCode::Enter) => {
            if let Some(id) = app.selected_task().map(|t| t.id) {
                app.open_edit_form(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.selected_task().map(|t| t.id) {
                app.request_delete(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            if let Some(id) = app.selected_task().map(|t| t.id) {
                app.toggle_task(id);
            }
        }

        // Search (live: the table refilters as the query is typed)
        (KeyModifiers::NONE, KeyCode::Char('/')) => {
            app.search_prev = Some(app.search_input.clone());
            app.mode = Mode::Search;
        }

        // Status filter: direct select or cycle
        (_, KeyCode::Char('1')) => set_filter(app, StatusFilter::All),
        (_, KeyCode::Char('2')) => set_filter(app, StatusFilter::Pending),
        (_, KeyCode::Char('3')) => set_filter(app, StatusFilter::Completed),
        (KeyModifiers::NONE, KeyCode::Char('f')) => {
            set_filter(app, app.filter.next());
        }

        // Esc: dismiss the oldest toast first, then clear the search query
        (_, KeyCode::Esc) => {
            if let Some(id) = app.toasts.front().map(|t| t.id) {
                app.toasts.dismiss(id);
            } else if !app.search_input.is_empty() {
                app.search_input.clear();
                app.clamp_cursor();
            }
        }

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        _ => {}
    }
}

fn set_filter(app: &mut App, filter: StatusFilter) {
    app.filter = filter;
    app.cursor = 0;
    app.scroll_offset = 0;
}
