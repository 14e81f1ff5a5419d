use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::form::FormField;
use crate::util::text;

use super::super::app::{App, FormModal, Modal};
use super::popup_area;

/// The add/edit modal. Form controls are rendered disabled (dimmed, no
/// cursor) while the simulated save is in flight.
pub fn render_form_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Modal::Form(form) = &app.modal else {
        return;
    };

    let popup = popup_area(area, 56, 13);
    frame.render_widget(Clear, popup);

    let title = if form.session.is_edit() {
        " Edit Task "
    } else {
        " Add New Task "
    };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight))
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = Vec::new();

    // Title field (required)
    lines.push(label_line(app, "Title", true));
    lines.push(field_line(app, form, FormField::Title, &form.session.title));
    lines.push(match form.session.error(FormField::Title) {
        Some(message) => Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.red),
        )),
        None => Line::default(),
    });

    // Description field (optional, never validated)
    lines.push(label_line(app, "Description", false));
    lines.push(field_line(
        app,
        form,
        FormField::Description,
        &form.session.description,
    ));
    lines.push(Line::default());

    // Status selector
    lines.push(label_line(app, "Status", false));
    let status_focused = form.focus == FormField::Status && !form.is_saving();
    lines.push(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("\u{2039} {} \u{203A}", form.session.status.label()),
            if status_focused {
                Style::default()
                    .fg(app.theme.background)
                    .bg(app.theme.status_color(form.session.status))
            } else {
                Style::default().fg(app.theme.status_color(form.session.status))
            },
        ),
    ]));
    lines.push(Line::default());

    // Footer: hints, or the saving indicator while the timer runs
    let footer = if form.is_saving() {
        Line::from(Span::styled(
            "  Saving\u{2026}",
            Style::default()
                .fg(app.theme.yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "  Enter save   Tab next field   Esc cancel",
            Style::default().fg(app.theme.dim),
        ))
    };
    lines.push(footer);

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        inner,
    );
}

fn label_line(app: &App, label: &str, required: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("  {}", label),
        Style::default().fg(app.theme.dim),
    )];
    if required {
        spans.push(Span::styled("*", Style::default().fg(app.theme.red)));
    }
    Line::from(spans)
}

/// One text field row with an inline cursor when focused
fn field_line(app: &App, form: &FormModal, field: FormField, value: &str) -> Line<'static> {
    let focused = form.focus == field && !form.is_saving();
    let style = if form.is_saving() {
        Style::default().fg(app.theme.dim)
    } else if focused {
        Style::default().fg(app.theme.text_bright)
    } else {
        Style::default().fg(app.theme.text)
    };

    let mut spans = vec![Span::styled("  ", Style::default())];
    if focused {
        let cursor = form.cursor.min(value.len());
        spans.push(Span::styled(value[..cursor].to_string(), style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight),
        ));
        spans.push(Span::styled(value[cursor..].to_string(), style));
    } else if value.is_empty() {
        spans.push(Span::styled(
            "\u{2014}",
            Style::default().fg(app.theme.dim),
        ));
    } else {
        spans.push(Span::styled(
            text::truncate_to_width(value, 50),
            style,
        ));
    }
    Line::from(spans)
}
