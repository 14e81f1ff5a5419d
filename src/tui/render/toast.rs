use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::util::text;

use super::super::app::App;

const MAX_WIDTH: u16 = 40;

/// Toasts stack top-right in push order, each expiring on its own deadline
pub fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    let mut y = area.y + 1;
    for toast in app.toasts.iter() {
        if y + 1 >= area.bottom() {
            break;
        }

        let body = format!(" {} {} ", toast.severity.icon(), toast.message);
        let width = (text::display_width(&body) as u16).min(MAX_WIDTH).min(area.width);
        let x = area.right().saturating_sub(width + 1);
        let rect = Rect::new(x, y, width, 1);

        frame.render_widget(Clear, rect);
        let accent = app.theme.severity_color(toast.severity);
        let line = Line::from(Span::styled(
            text::truncate_to_width(&body, width as usize),
            Style::default().fg(app.theme.background).bg(accent),
        ));
        frame.render_widget(Paragraph::new(line), rect);

        y += 2;
    }
}
