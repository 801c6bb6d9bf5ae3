//! Status bar component - bottom bar with active marker, last selection, shortcuts

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

const SHORTCUTS: &str = "a-z jump · Tab sticky · ^R reload · Esc quit ";

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    active_anchor: Option<&str>,
    last_selected: Option<&str>,
    sticky: bool,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let dim = Style::default().fg(theme.dim_color);
    let mut left_spans = vec![
        Span::raw(" "),
        Span::styled(
            active_anchor.unwrap_or("-"),
            Style::default().fg(theme.title_color),
        ),
    ];
    if let Some(selected) = last_selected {
        left_spans.push(Span::styled(" │ selected ", dim));
        left_spans.push(Span::styled(selected, Style::default().fg(theme.text_color)));
    }
    left_spans.push(Span::styled(
        if sticky { " │ sticky" } else { " │ plain" },
        dim,
    ));

    let left_width: u16 = left_spans.iter().map(|s| s.content.width() as u16).sum();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Min(0)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);
    f.render_widget(
        Paragraph::new(Span::styled(SHORTCUTS, dim)).alignment(Alignment::Right),
        chunks[1],
    );
}
