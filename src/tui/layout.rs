//! Screen layout
//!
//! Fixed vertical split for the wizard screen plus a centered-rect helper
//! for the thank-you panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the wizard screen
pub struct WizardLayout {
    /// Question header
    pub header: Rect,
    /// Step body (option list or inputs)
    pub body: Rect,
    /// Back/Next hint line
    pub hints: Rect,
    /// "Step i of n" status bar
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Split the frame area into the wizard regions
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(4),    // body
                Constraint::Length(2), // hints
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            hints: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_frame_height() {
        let layout = WizardLayout::new(Rect::new(0, 0, 80, 24));
        let total = layout.header.height
            + layout.body.height
            + layout.hints.height
            + layout.status_bar.height;
        assert_eq!(total, 24);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let r = centered_rect_fixed(100, 100, Rect::new(0, 0, 40, 10));
        assert_eq!(r.width, 40);
        assert_eq!(r.height, 10);
    }
}
