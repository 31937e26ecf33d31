//! Thank-you screen
//!
//! Terminal view shown once the wizard completes.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::layout::centered_rect_fixed;

/// Render the completion screen
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(60, 7, frame.area());

    let block = Block::default()
        .title(" Thank you! ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::from(""),
        Line::from(Span::raw(
            "We've received your information and will be in touch soon.",
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
