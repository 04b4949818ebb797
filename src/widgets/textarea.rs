//! Multi-line text area.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAreaSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAreaVariant {
    #[default]
    Default,
    Outline,
    Filled,
    Minimal,
}

/// Editing state: lines plus a (row, column) cursor in characters.
#[derive(Debug, Clone)]
pub struct TextAreaState {
    pub lines: Vec<String>,
    pub row: usize,
    pub col: usize,
}

impl Default for TextAreaState {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl TextAreaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let lines: Vec<String> = if text.is_empty() {
            vec![String::new()]
        } else {
            text.split('\n').map(str::to_string).collect()
        };
        let row = lines.len() - 1;
        let col = lines[row].chars().count();
        Self { lines, row, col }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self) -> usize {
        self.lines[self.row]
            .char_indices()
            .nth(self.col)
            .map(|(i, _)| i)
            .unwrap_or(self.lines[self.row].len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.lines[self.row].insert(at, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let at = self.byte_index();
        let rest = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn delete_back(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let at = self.byte_index();
            self.lines[self.row].remove(at);
        } else if self.row > 0 {
            // Join with the previous line.
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    /// Apply a key event. Returns true when the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.col = 0,
            KeyCode::End => self.col = self.line_len(self.row),
            _ => return false,
        }
        true
    }

    fn cursor_column(&self) -> u16 {
        let prefix: String = self.lines[self.row].chars().take(self.col).collect();
        prefix.width() as u16
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextArea {
    pub label: Option<String>,
    pub error: Option<String>,
    pub helper_text: Option<String>,
    pub size: TextAreaSize,
    pub variant: TextAreaVariant,
    pub focused: bool,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_helper_text(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    pub fn with_size(mut self, size: TextAreaSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_variant(mut self, variant: TextAreaVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Content rows for the size preset, excluding borders.
    pub fn content_rows(&self) -> u16 {
        match self.size {
            TextAreaSize::Small => 3,
            TextAreaSize::Medium => 5,
            TextAreaSize::Large => 8,
        }
    }

    pub fn height(&self) -> u16 {
        let borders = match self.variant {
            TextAreaVariant::Minimal => 0,
            _ => 2,
        };
        let label = u16::from(self.label.is_some());
        let footer = u16::from(self.error.is_some() || self.helper_text.is_some());
        label + self.content_rows() + borders + footer
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    textarea: &TextArea,
    state: &TextAreaState,
    palette: &Palette,
) {
    let mut y = area.y;

    if let Some(label) = &textarea.label {
        frame.render_widget(
            Paragraph::new(label.as_str()).style(palette.label()),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }

    let border_style = if textarea.error.is_some() {
        palette.error_text()
    } else if textarea.focused {
        palette.border_focused()
    } else {
        palette.border()
    };

    let borders = match textarea.variant {
        TextAreaVariant::Minimal => 0u16,
        _ => 2,
    };
    let field_h = (textarea.content_rows() + borders).min(area.height.saturating_sub(y - area.y));
    let field_area = Rect::new(area.x, y, area.width, field_h);
    y += field_h;

    let inner = match textarea.variant {
        TextAreaVariant::Minimal => field_area,
        variant => {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .border_type(match variant {
                    TextAreaVariant::Outline => BorderType::Double,
                    _ => BorderType::Rounded,
                })
                .border_style(border_style);
            if variant == TextAreaVariant::Filled {
                block = block.style(palette.surface_bg());
            }
            let inner = block.inner(field_area);
            frame.render_widget(block, field_area);
            inner
        }
    };

    let lines: Vec<Line> = state
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(l.clone(), palette.body())))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if textarea.focused {
        let cursor_x = inner.x + state.cursor_column();
        let cursor_y = inner.y + state.row as u16;
        frame.set_cursor_position((
            cursor_x.min(inner.right().saturating_sub(1)),
            cursor_y.min(inner.bottom().saturating_sub(1)),
        ));
    }

    if let Some(error) = &textarea.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(palette.error_text()),
            Rect::new(area.x, y, area.width, 1),
        );
    } else if let Some(helper) = &textarea.helper_text {
        frame.render_widget(
            Paragraph::new(helper.as_str()).style(palette.helper_text()),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_newline_splits_line() {
        let mut state = TextAreaState::with_text("abcd");
        state.move_left();
        state.move_left();
        state.insert_newline();
        assert_eq!(state.text(), "ab\ncd");
        assert_eq!((state.row, state.col), (1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut state = TextAreaState::with_text("ab\ncd");
        state.row = 1;
        state.col = 0;
        state.delete_back();
        assert_eq!(state.text(), "abcd");
        assert_eq!((state.row, state.col), (0, 2));
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut state = TextAreaState::with_text("long line\nab");
        assert_eq!((state.row, state.col), (1, 2));
        state.move_up();
        assert_eq!((state.row, state.col), (0, 2));
        state.col = 9;
        state.move_down();
        assert_eq!((state.row, state.col), (1, 2));
    }

    #[test]
    fn test_handle_key_edits() {
        let mut state = TextAreaState::new();
        assert!(state.handle_key(key(KeyCode::Char('a'))));
        assert!(state.handle_key(key(KeyCode::Enter)));
        assert!(state.handle_key(key(KeyCode::Char('b'))));
        assert_eq!(state.text(), "a\nb");
        assert!(!state.handle_key(key(KeyCode::Tab)));
    }

    #[test]
    fn test_height_by_size_and_variant() {
        assert_eq!(TextArea::new().height(), 7); // medium + borders
        assert_eq!(
            TextArea::new()
                .with_size(TextAreaSize::Small)
                .with_variant(TextAreaVariant::Minimal)
                .height(),
            3
        );
        assert_eq!(
            TextArea::new()
                .with_size(TextAreaSize::Large)
                .with_label("Bio")
                .with_helper_text("optional")
                .height(),
            12
        );
    }
}
