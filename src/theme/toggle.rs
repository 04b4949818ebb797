//! Theme toggle button.
//!
//! Shows the mode the press would switch to (moon while light, sun while
//! dark). The widget only draws; the host wires its activation key to
//! [`ThemeStore::toggle`](super::ThemeStore::toggle).

use ratatui::prelude::*;

use super::{Palette, ThemeMode};
use crate::widgets::button::{self, Button, ButtonVariant};

#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeToggle {
    pub focused: bool,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Label for the current mode: what pressing the toggle switches to.
    pub fn label(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => "☾ dark",
            ThemeMode::Dark => "☀ light",
        }
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    toggle: &ThemeToggle,
    mode: ThemeMode,
    palette: &Palette,
) {
    let button = Button::new(ThemeToggle::label(mode))
        .with_variant(ButtonVariant::Toggle)
        .active(mode.is_dark())
        .focused(toggle.focused);
    button::render(frame, area, &button, palette, 0);
}
