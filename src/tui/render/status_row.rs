use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::{App, Modal, Mode};

/// Key hints at the bottom of the screen, per interaction state
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let hint = match (&app.modal, app.mode) {
        (Modal::Form(form), _) if form.is_saving() => "saving\u{2026}",
        (Modal::Form(_), _) => "Tab field  Enter save  Esc cancel",
        (Modal::ConfirmDelete { .. }, _) => "y delete  n cancel",
        (Modal::None, Mode::Search) => "type to filter  Enter keep  Esc revert",
        (Modal::None, Mode::Navigate) => {
            "a add  e edit  d delete  \u{2423} toggle  / search  1/2/3 filter  ? help  q quit"
        }
    };

    let line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
