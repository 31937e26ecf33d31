//! Numeric area input

use ratatui::{layout::Rect, Frame};

use super::super::app::App;

/// Render the area input on the number step
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let input_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(app.area_input.clone().focused(true), input_area);
}
