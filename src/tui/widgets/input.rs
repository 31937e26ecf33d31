//! Text input widget
//!
//! A single-line text input with cursor support, used for the area field and
//! the contact form. The cursor is a character index so editing stays on
//! char boundaries whatever the user types.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position as a character index into `content`
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Number of characters in the content
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the given character index
    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.len() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let display_text = if self.content.is_empty() {
            self.placeholder.clone()
        } else {
            self.content.clone()
        };

        let text_style = if self.content.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        buf.set_string(input_start, area.y, &display_text, text_style);

        if self.focused {
            // cursor is a char index, so it doubles as the column offset
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        input.insert('4');
        input.insert('5');
        assert_eq!(input.value(), "45");
        input.backspace();
        assert_eq!(input.value(), "4");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn test_cursor_movement_is_bounded() {
        let mut input = TextInput::new();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.insert('a');
        input.move_right();
        assert_eq!(input.cursor, 1);
        input.move_start();
        input.insert('b');
        assert_eq!(input.value(), "ba");
    }

    #[test]
    fn test_backspace_after_multibyte_char() {
        let mut input = TextInput::new();
        for c in "José".chars() {
            input.insert(c);
        }
        assert_eq!(input.cursor, 4);
        input.backspace();
        assert_eq!(input.value(), "Jos");
        input.backspace();
        assert_eq!(input.value(), "Jo");
    }

    #[test]
    fn test_edit_inside_multibyte_content() {
        let mut input = TextInput::new();
        for c in "Zoë".chars() {
            input.insert(c);
        }
        input.move_left();
        input.insert('l');
        assert_eq!(input.value(), "Zolë");

        input.move_right();
        assert_eq!(input.cursor, 4);
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Zoë");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_move_end_uses_char_count() {
        let mut input = TextInput::new();
        for c in "Müller".chars() {
            input.insert(c);
        }
        input.move_start();
        input.move_end();
        assert_eq!(input.cursor, 6);
        input.insert('!');
        assert_eq!(input.value(), "Müller!");
    }
}
