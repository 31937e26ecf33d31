//! Status bar
//!
//! Shows the step position and the global key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::super::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    spans.push(Span::styled(
        format!(
            " Step {} of {} ",
            app.wizard.step_index() + 1,
            app.wizard.step_count()
        ),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    let hints = " ↑/↓: Move  Space: Select  Ctrl+C: Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
