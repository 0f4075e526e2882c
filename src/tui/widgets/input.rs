//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters,
//! not bytes, so paths with non-ASCII names edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    pub focused: bool,
    pub placeholder: String,
    pub label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index();
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index();
            self.content.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        let input_start = area.x + label_width as u16;
        let input_width = area.width.saturating_sub(label_width as u16) as usize;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let showing_placeholder = self.content.is_empty() && !self.focused;
        let (display_text, text_style) = if showing_placeholder {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else {
            (self.content.as_str(), Style::default().fg(Color::White))
        };

        // Keep the cursor visible when the text is wider than the field
        let skip = if self.focused && input_width > 0 {
            (self.cursor + 1).saturating_sub(input_width)
        } else {
            0
        };
        let visible: String = display_text.chars().skip(skip).take(input_width).collect();
        buf.set_string(input_start, area.y, &visible, text_style);

        if self.focused {
            let cursor_x = input_start + (self.cursor - skip) as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
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
    fn test_editing() {
        let mut input = TextInput::new();
        for c in "society.xlsx".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "society.xlsx");

        input.backspace();
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "ociety.xls");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new();
        input.set_content("₹.xlsx");
        input.move_start();
        input.move_right();
        input.insert('x');
        assert_eq!(input.value(), "₹x.xlsx");

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "x.xlsx");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        input.backspace();
        input.delete();
        assert_eq!(input.cursor, 0);

        input.set_content("ab");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.clear();
        assert!(input.value().is_empty());
    }
}
