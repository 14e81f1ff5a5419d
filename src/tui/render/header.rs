use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view::StatusFilter;

use super::super::app::{App, Mode};

/// Title line plus the aggregate stat counts (always over the unfiltered
/// repository, whatever filter or search is active)
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let counts = app.counts();

    let title = Line::from(vec![
        Span::styled(
            " Task Manager ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "— organize and manage your tasks",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);

    let stats = Line::from(vec![
        Span::styled(" Total ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            counts.total.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled("   Completed ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            counts.completed.to_string(),
            Style::default().fg(app.theme.green).bg(bg),
        ),
        Span::styled("   Pending ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            counts.pending.to_string(),
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
    ]);

    let paragraph = Paragraph::new(vec![title, Line::default(), stats])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Filter tabs with live counts, plus the search query on the right
pub fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let counts = app.counts();

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (key, filter, count) in [
        ("1", StatusFilter::All, counts.total),
        ("2", StatusFilter::Pending, counts.pending),
        ("3", StatusFilter::Completed, counts.completed),
    ] {
        let active = app.filter == filter;
        let style = if active {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(format!("[{}] ", key), style));
        spans.push(Span::styled(
            format!("{} ({})", filter.label(), count),
            style,
        ));
        spans.push(Span::styled("   ", Style::default().bg(bg)));
    }

    // Right-aligned search box
    let search = if app.mode == Mode::Search {
        format!("/{}\u{258C}", app.search_input)
    } else if app.search_input.is_empty() {
        "/ search".to_string()
    } else {
        format!("/{}", app.search_input)
    };
    let search_style = if app.mode == Mode::Search {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else if app.search_input.is_empty() {
        Style::default().fg(app.theme.dim).bg(bg)
    } else {
        Style::default().fg(app.theme.cyan).bg(bg)
    };

    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let search_width = search.chars().count() + 1;
    let width = area.width as usize;
    if used + search_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - search_width),
            Style::default().bg(bg),
        ));
    }
    spans.push(Span::styled(search, search_style));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
