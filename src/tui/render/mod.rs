pub mod confirm_dialog;
pub mod form_modal;
pub mod header;
pub mod help_overlay;
pub mod status_row;
pub mod table;
pub mod toast;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, Modal};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (title + stats) | filter/search controls | table | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    header::render_controls(frame, app, chunks[1]);
    table::render_table(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Modal overlays (at most one, by construction of Modal)
    match &app.modal {
        Modal::Form(_) => form_modal::render_form_modal(frame, app, area),
        Modal::ConfirmDelete { .. } => confirm_dialog::render_confirm_dialog(frame, app, area),
        Modal::None => {}
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    // Toasts sit on top of everything, stacked top-right
    toast::render_toasts(frame, app, area);
}

/// A centered popup rect of at most `width` x `height` cells
pub(super) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Push spans for text with search-match highlighting. With no regex or no
/// match, pushes a single span in `base_style`; otherwise splits the text at
/// match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use crate::ops::repo::TaskRepo;
    use crate::ops::view::StatusFilter;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn seeded_app() -> App {
        App::new(
            TaskRepo::seeded(),
            &AppConfig::default(),
            StatusFilter::All,
        )
    }

    #[test]
    fn renders_seeded_surface() {
        let mut app = seeded_app();
        let screen = draw(&mut app);
        assert!(screen.contains("Task Manager"));
        assert!(screen.contains("Complete Project Documentation"));
        assert!(screen.contains("All (5)"));
        assert!(screen.contains("Pending (3)"));
        assert!(screen.contains("Completed (2)"));
    }

    #[test]
    fn renders_form_modal_over_the_table() {
        let mut app = seeded_app();
        app.open_add_form();
        let screen = draw(&mut app);
        assert!(screen.contains("Add New Task"));
        assert!(screen.contains("Title"));
    }

    #[test]
    fn renders_confirm_dialog_with_the_task_title() {
        let mut app = seeded_app();
        app.request_delete(2);
        let screen = draw(&mut app);
        assert!(screen.contains("Confirm Delete"));
        assert!(screen.contains("Review Pull Requests"));
    }

    #[test]
    fn renders_empty_state_when_nothing_matches() {
        let mut app = seeded_app();
        app.search_input = "zzz no such task".to_string();
        let screen = draw(&mut app);
        assert!(screen.contains("No tasks found"));
    }

    #[test]
    fn highlight_splits_at_match_boundaries() {
        let re = Regex::new("(?i)doc").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(
            &mut spans,
            "Documentation",
            Style::default(),
            Style::default(),
            Some(&re),
        );
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Doc", "umentation"]);
    }
}
