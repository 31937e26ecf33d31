//! Contact form
//!
//! Three stacked inputs for name, email, and phone. Name and email gate the
//! final submit; phone is optional.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::wizard::ContactPart;

use super::super::app::App;

/// Render the contact triplet on the contact step
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    for (row, part) in ContactPart::ALL.into_iter().enumerate() {
        let y = area.y + (row as u16) * 2;
        if y >= area.y + area.height {
            break;
        }
        let input_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        };
        let focused = app.contact_focus == part;
        let input = app.contact_input_mut(part).clone().focused(focused);
        frame.render_widget(input, input_area);
    }

    let hint_y = area.y + (ContactPart::ALL.len() as u16) * 2;
    if hint_y < area.y + area.height {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Tab: next field (phone optional)",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(
            hint,
            Rect {
                x: area.x,
                y: hint_y,
                width: area.width,
                height: 1,
            },
        );
    }
}
