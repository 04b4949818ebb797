//! Single-line text input.
//!
//! `TextInputState` owns the text and cursor; `TextInput` is the visual
//! configuration. The host decides which widget has focus and forwards
//! key events to the focused state's `handle_key`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    #[default]
    Default,
    Small,
}

/// Editing state: text plus a character-index cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    pub text: String,
    pub cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.text.remove(at);
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index();
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Apply a key event. Returns true when the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Display column of the cursor, in terminal cells.
    pub fn cursor_column(&self) -> u16 {
        let prefix: String = self.text.chars().take(self.cursor).collect();
        prefix.width() as u16
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub error: Option<String>,
    pub helper_text: Option<String>,
    pub variant: InputVariant,
    pub masked: bool,
    pub focused: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
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

    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows the widget occupies: label + field + error/helper line.
    pub fn height(&self) -> u16 {
        let field = match self.variant {
            InputVariant::Default => 3,
            InputVariant::Small => 1,
        };
        let label = u16::from(self.label.is_some());
        let footer = u16::from(self.error.is_some() || self.helper_text.is_some());
        label + field + footer
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &TextInput,
    state: &TextInputState,
    palette: &Palette,
) {
    let mut y = area.y;

    if let Some(label) = &input.label {
        let label_area = Rect::new(area.x, y, area.width, 1);
        frame.render_widget(
            Paragraph::new(label.as_str()).style(palette.label()),
            label_area,
        );
        y += 1;
    }

    // Error state recolors the field border; error text wins over helper.
    let border_style = if input.error.is_some() {
        palette.error_text()
    } else if input.focused {
        palette.border_focused()
    } else {
        palette.border()
    };

    let field_h = match input.variant {
        InputVariant::Default => 3u16,
        InputVariant::Small => 1,
    };
    let field_area = Rect::new(area.x, y, area.width, field_h.min(area.height));
    y += field_h;

    let shown: String = if input.masked {
        "•".repeat(state.text.chars().count())
    } else {
        state.text.clone()
    };

    let (content, content_style) = if shown.is_empty() {
        match &input.placeholder {
            Some(p) => (p.clone(), palette.muted()),
            None => (String::new(), palette.body()),
        }
    } else {
        (shown, palette.body())
    };

    let inner = match input.variant {
        InputVariant::Default => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style);
            let inner = block.inner(field_area);
            frame.render_widget(block, field_area);
            inner
        }
        InputVariant::Small => field_area,
    };

    frame.render_widget(Paragraph::new(content).style(content_style), inner);

    if input.focused {
        let cursor_x = inner.x + state.cursor_column();
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }

    if let Some(error) = &input.error {
        let footer = Rect::new(area.x, y, area.width, 1);
        frame.render_widget(
            Paragraph::new(error.as_str()).style(palette.error_text()),
            footer,
        );
    } else if let Some(helper) = &input.helper_text {
        let footer = Rect::new(area.x, y, area.width, 1);
        frame.render_widget(
            Paragraph::new(helper.as_str()).style(palette.helper_text()),
            footer,
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
    fn test_insert_and_delete() {
        let mut state = TextInputState::new();
        for c in "héllo".chars() {
            state.insert_char(c);
        }
        assert_eq!(state.text, "héllo");
        assert_eq!(state.cursor, 5);

        state.delete_back();
        assert_eq!(state.text, "héll");

        state.move_home();
        state.delete_forward();
        assert_eq!(state.text, "éll");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = TextInputState::with_text("ab");
        state.move_right();
        assert_eq!(state.cursor, 2);
        state.move_left();
        state.move_left();
        state.move_left();
        assert_eq!(state.cursor, 0);
        state.delete_back();
        assert_eq!(state.text, "ab");
    }

    #[test]
    fn test_handle_key_consumes_edits_only() {
        let mut state = TextInputState::new();
        assert!(state.handle_key(key(KeyCode::Char('x'))));
        assert!(!state.handle_key(key(KeyCode::Tab)));
        assert_eq!(state.text, "x");
    }

    #[test]
    fn test_mid_text_insertion() {
        let mut state = TextInputState::with_text("ac");
        state.move_left();
        state.insert_char('b');
        assert_eq!(state.text, "abc");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_height_accounts_for_label_and_footer() {
        assert_eq!(TextInput::new().height(), 3);
        assert_eq!(TextInput::new().with_label("Name").height(), 4);
        assert_eq!(
            TextInput::new()
                .with_label("Name")
                .with_error("required")
                .height(),
            5
        );
        assert_eq!(
            TextInput::new().with_variant(InputVariant::Small).height(),
            1
        );
    }
}
