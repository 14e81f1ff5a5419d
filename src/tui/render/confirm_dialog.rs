use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::super::app::{App, Modal};
use super::popup_area;

/// Delete confirmation dialog for the one pending destructive action
pub fn render_confirm_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Modal::ConfirmDelete { title, .. } = &app.modal else {
        return;
    };

    let popup = popup_area(area, 52, 8);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            " Confirm Delete ",
            Style::default()
                .fg(app.theme.red)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(Span::styled(
            " Are you sure you want to delete the task",
            Style::default().fg(app.theme.text),
        )),
        Line::from(Span::styled(
            format!(" \"{}\"?", title),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " This action cannot be undone.",
            Style::default().fg(app.theme.dim),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" y", Style::default().fg(app.theme.red)),
            Span::styled(" delete   ", Style::default().fg(app.theme.dim)),
            Span::styled("n", Style::default().fg(app.theme.text_bright)),
            Span::styled(" cancel", Style::default().fg(app.theme.dim)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(app.theme.background)),
        inner,
    );
}
