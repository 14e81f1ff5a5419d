use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::text;

use super::super::app::{App, Mode};

/// Search entry edits `search_input` in place; the table refilters on every
/// keystroke. Enter keeps the query, Esc restores the one before `/`.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            app.search_prev = None;
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        (_, KeyCode::Esc) => {
            if let Some(prev) = app.search_prev.take() {
                app.search_input = prev;
            }
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = text::prev_grapheme_boundary(&app.search_input, app.search_input.len())
            {
                app.search_input.truncate(prev);
                app.clamp_cursor();
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.cursor = 0;
            app.scroll_offset = 0;
        }
        _ => {}
    }
}
