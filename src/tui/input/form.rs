use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::form::FormField;
use crate::util::text;

use super::super::app::{App, Modal};

/// Add/edit modal input: Tab cycles fields, Enter submits, Esc cancels.
/// Everything is ignored while the simulated save is in flight — the form
/// controls are disabled and the save cannot be cancelled.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let Modal::Form(form) = &mut app.modal else {
        return;
    };
    if form.is_saving() {
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            app.submit_form(Instant::now());
        }
        (_, KeyCode::Esc) => {
            app.cancel_modal();
        }

        // Field focus
        (KeyModifiers::NONE, KeyCode::Tab) => {
            let next = form.focus.next();
            form.set_focus(next);
        }
        (_, KeyCode::BackTab) => {
            let prev = form.focus.prev();
            form.set_focus(prev);
        }

        // Status selector: arrows or Space flip Pending↔Completed
        (_, KeyCode::Left | KeyCode::Right)
            if form.focus == FormField::Status =>
        {
            form.session.status = form.session.status.toggled();
            form.session.edited(FormField::Status);
        }
        (KeyModifiers::NONE, KeyCode::Char(' ')) if form.focus == FormField::Status => {
            form.session.status = form.session.status.toggled();
            form.session.edited(FormField::Status);
        }

        // Cursor movement within the focused text field
        (_, KeyCode::Left) => {
            if let Some(buffer) = form.focused_text()
                && let Some(prev) = text::prev_grapheme_boundary(buffer, form.cursor)
            {
                form.cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(buffer) = form.focused_text()
                && let Some(next) = text::next_grapheme_boundary(buffer, form.cursor)
            {
                form.cursor = next;
            }
        }
        (_, KeyCode::Home) => {
            form.cursor = 0;
        }
        (_, KeyCode::End) => {
            form.cursor = form.focused_text().map_or(0, str::len);
        }

        // Editing. Any edit clears that field's validation error.
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            let focus = form.focus;
            let cursor = form.cursor;
            if let Some(buffer) = form.focused_text_mut()
                && let Some(prev) = text::prev_grapheme_boundary(buffer, cursor)
            {
                buffer.drain(prev..cursor);
                form.cursor = prev;
                form.session.edited(focus);
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let focus = form.focus;
            let cursor = form.cursor;
            if let Some(buffer) = form.focused_text_mut() {
                buffer.insert(cursor, c);
                form.cursor = cursor + c.len_utf8();
                form.session.edited(focus);
            }
        }

        _ => {}
    }
}
