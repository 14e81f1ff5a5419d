use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::app::App;
use super::popup_area;

const BINDINGS: &[(&str, &str)] = &[
    ("j / k, \u{2191} / \u{2193}", "move between tasks"),
    ("g / G", "first / last task"),
    ("a", "add a task"),
    ("e, Enter", "edit the selected task"),
    ("d", "delete the selected task (asks first)"),
    ("Space", "toggle Pending/Completed"),
    ("/", "search titles (live)"),
    ("1 / 2 / 3, f", "filter All / Pending / Completed"),
    ("Esc", "dismiss toast, then clear search"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = BINDINGS.len() as u16 + 3;
    let popup = popup_area(area, 52, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            " Keys ",
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<16}", keys),
                    Style::default().fg(app.theme.cyan),
                ),
                Span::styled(*action, Style::default().fg(app.theme.text)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        inner,
    );
}
