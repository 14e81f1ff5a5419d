mod confirm;
mod form;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Modal, Mode};

/// Handle a key event, routed by the open modal first, then by mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match &app.modal {
        Modal::Form(_) => form::handle_form(app, key),
        Modal::ConfirmDelete { .. } => confirm::handle_confirm(app, key),
        Modal::None => match app.mode {
            Mode::Navigate => navigate::handle_navigate(app, key),
            Mode::Search => search::handle_search(app, key),
        },
    }
}
