use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app::App;

/// Delete confirmation dialog: y/Enter confirms, n/Esc cancels
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) | (_, KeyCode::Enter) => {
            app.confirm_delete();
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.cancel_modal();
        }
        _ => {}
    }
}
