use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::util::text;

use super::super::app::App;
use super::push_highlighted_spans;

const STATUS_WIDTH: usize = 11;
const DATE_WIDTH: usize = 22;
const GAP: usize = 2;

/// Locale-style display format; storage stays RFC 3339 UTC
pub fn format_created(task: &Task) -> String {
    task.created_at
        .with_timezone(&Local)
        .format("%b %-d, %Y, %-I:%M %p")
        .to_string()
}

/// The task table: status badge, title, description, created date.
/// Keeps the cursor row inside the viewport by adjusting scroll_offset.
pub fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    // Owned snapshot: the projection borrows the repository, and scroll
    // adjustment below needs &mut App
    let visible: Vec<Task> = app.visible().into_iter().cloned().collect();

    if visible.is_empty() {
        let empty = if app.repo.is_empty() {
            vec![
                Line::default(),
                Line::from(Span::styled(
                    "  No tasks found",
                    Style::default().fg(app.theme.text_bright).bg(bg),
                )),
                Line::from(Span::styled(
                    "  Start by adding your first task! (a)",
                    Style::default().fg(app.theme.dim).bg(bg),
                )),
            ]
        } else {
            vec![
                Line::default(),
                Line::from(Span::styled(
                    "  No tasks found",
                    Style::default().fg(app.theme.text_bright).bg(bg),
                )),
                Line::from(Span::styled(
                    "  No task matches the current filter or search",
                    Style::default().fg(app.theme.dim).bg(bg),
                )),
            ]
        };
        frame.render_widget(Paragraph::new(empty).style(Style::default().bg(bg)), area);
        return;
    }

    // One header row, the rest for tasks
    let rows = (area.height as usize).saturating_sub(1);
    if rows == 0 {
        return;
    }

    // Scroll to keep the cursor visible
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + rows {
        app.scroll_offset = app.cursor + 1 - rows;
    }

    let width = area.width as usize;
    let fixed = STATUS_WIDTH + DATE_WIDTH + GAP * 3 + 2;
    let flexible = width.saturating_sub(fixed);
    let title_width = (flexible * 3 / 5).max(10);
    let desc_width = flexible.saturating_sub(title_width + GAP);

    let mut lines = Vec::with_capacity(rows + 1);
    lines.push(header_line(app, title_width, desc_width));

    let search_re = app.search_re();
    for (row, task) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(rows)
    {
        let selected = row == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let mut spans = Vec::new();

        let marker = if selected { "\u{25B8} " } else { "  " };
        spans.push(Span::styled(
            marker,
            Style::default().fg(app.theme.highlight).bg(row_bg),
        ));

        spans.push(Span::styled(
            pad(task.status.label(), STATUS_WIDTH),
            Style::default()
                .fg(app.theme.status_color(task.status))
                .bg(row_bg),
        ));
        spans.push(gap(row_bg));

        // Title, with search matches highlighted
        let title = text::truncate_to_width(&task.title, title_width);
        let title_pad = title_width.saturating_sub(text::display_width(&title));
        let title_style = Style::default()
            .fg(if selected {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        push_highlighted_spans(
            &mut spans,
            &title,
            title_style,
            Style::default()
                .fg(app.theme.search_match_fg)
                .bg(app.theme.search_match_bg),
            search_re.as_ref(),
        );
        spans.push(Span::styled(
            " ".repeat(title_pad + GAP),
            Style::default().bg(row_bg),
        ));

        // Description; empty renders as a placeholder (data stays empty)
        if task.description.is_empty() {
            spans.push(Span::styled(
                pad("No description", desc_width),
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(
                pad(&text::truncate_to_width(&task.description, desc_width), desc_width),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ));
        }
        spans.push(gap(row_bg));

        spans.push(Span::styled(
            pad(&format_created(task), DATE_WIDTH),
            Style::default().fg(app.theme.dim).bg(row_bg),
        ));

        // Fill the row so the selection background spans the full width
        let used: usize = spans.iter().map(|s| text::display_width(&s.content)).sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn header_line(app: &App, title_width: usize, desc_width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let style = Style::default()
        .fg(app.theme.dim)
        .bg(bg)
        .add_modifier(Modifier::UNDERLINED);
    Line::from(vec![
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(pad("Status", STATUS_WIDTH), style),
        gap(bg),
        Span::styled(pad("Title", title_width), style),
        gap(bg),
        Span::styled(pad("Description", desc_width), style),
        gap(bg),
        Span::styled(pad("Created", DATE_WIDTH), style),
    ])
}

fn gap(bg: ratatui::style::Color) -> Span<'static> {
    Span::styled(" ".repeat(GAP), Style::default().bg(bg))
}

/// Truncate to `width` cells and pad with spaces to exactly `width`
fn pad(s: &str, width: usize) -> String {
    let truncated = text::truncate_to_width(s, width);
    let used = text::display_width(&truncated);
    format!("{}{}", truncated, " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::seed_tasks;

    #[test]
    fn created_date_uses_month_day_year_time() {
        let tasks = seed_tasks();
        let formatted = format_created(&tasks[0]);
        // Local offset shifts the exact time, but the shape is fixed
        assert!(formatted.contains("2025"));
        assert!(formatted.contains(','));
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
    }

    #[test]
    fn pad_is_exact_width() {
        assert_eq!(pad("ab", 5), "ab   ");
        assert_eq!(pad("abcdef", 4).chars().count(), 4);
    }
}
