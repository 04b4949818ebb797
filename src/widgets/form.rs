//! Form layout and submit handling.
//!
//! A form does not own its fields; it hands the host a set of rects to
//! place them in, draws the surrounding chrome for the selected variant,
//! and consumes the submit key before invoking the caller's handler so
//! the key never leaks into whatever field had focus.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    #[default]
    Default,
    Modal,
    Card,
    Inline,
    Compact,
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    pub variant: FormVariant,
    pub title: Option<String>,
}

impl Form {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Vertical gap between fields for this variant.
    fn spacing(&self) -> u16 {
        match self.variant {
            FormVariant::Default | FormVariant::Modal | FormVariant::Card => 1,
            FormVariant::Inline | FormVariant::Compact => 0,
        }
    }

    /// Draw the form chrome and return the area fields should occupy.
    pub fn render_chrome(&self, frame: &mut Frame, area: Rect, palette: &Palette) -> Rect {
        match self.variant {
            FormVariant::Card => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(palette.border())
                    .style(palette.surface_bg());
                if let Some(title) = &self.title {
                    block = block
                        .title(format!(" {title} "))
                        .title_style(palette.title());
                }
                let inner = block.inner(area);
                frame.render_widget(block, area);
                inner
            }
            FormVariant::Modal => {
                // Modal forms sit inside a modal body, which already has
                // chrome; just reserve a margin.
                let block = Block::default().style(palette.surface_bg());
                frame.render_widget(block, area);
                area.inner(Margin::new(1, 0))
            }
            _ => area,
        }
    }

    /// Slice `area` into one rect per field height. `Inline` lays fields
    /// out side by side; every other variant stacks them with the
    /// variant's spacing.
    pub fn layout(&self, area: Rect, field_heights: &[u16]) -> Vec<Rect> {
        if field_heights.is_empty() {
            return Vec::new();
        }

        if self.variant == FormVariant::Inline {
            let widths = vec![Constraint::Ratio(1, field_heights.len() as u32); field_heights.len()];
            return Layout::horizontal(widths)
                .spacing(1)
                .split(area)
                .to_vec();
        }

        let spacing = self.spacing();
        let mut rects = Vec::with_capacity(field_heights.len());
        let mut y = area.y;
        for &h in field_heights {
            let h = h.min(area.bottom().saturating_sub(y));
            rects.push(Rect::new(area.x, y, area.width, h));
            y = (y + h + spacing).min(area.bottom());
        }
        rects
    }

    /// Consume a submit key. When `key` is Enter the caller's handler
    /// runs and the event is reported handled, so the host stops
    /// propagating it; any other key is left alone.
    pub fn handle_key(&self, key: KeyEvent, on_submit: impl FnOnce()) -> bool {
        if key.code == KeyCode::Enter {
            on_submit();
            true
        } else {
            false
        }
    }
}
