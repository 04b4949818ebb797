//! Button rendering.
//!
//! A button is a label plus a variant preset; it keeps no state of its
//! own. Activation is the host's concern (key handling in whatever panel
//! owns focus), so the widget only draws.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::loading::{self, LoadingVariant};
use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Icon,
    Danger,
    Success,
    Outline,
    Nav,
    Custom,
    Link,
    Warning,
    Toggle,
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub is_loading: bool,
    pub loading_text: Option<String>,
    pub is_active: bool,
    pub disabled: bool,
    pub focused: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn with_loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = Some(text.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

struct ButtonLook {
    text: Style,
    border: Option<Style>,
}

fn look(button: &Button, palette: &Palette) -> ButtonLook {
    let filled = |bg: Color| ButtonLook {
        text: Style::default()
            .fg(palette.surface)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
        border: Some(Style::default().fg(bg)),
    };

    if button.disabled {
        return ButtonLook {
            text: palette.muted(),
            border: Some(Style::default().fg(palette.border_dim)),
        };
    }

    match button.variant {
        ButtonVariant::Primary => filled(palette.accent),
        ButtonVariant::Danger => filled(palette.danger),
        ButtonVariant::Success => filled(palette.success),
        ButtonVariant::Warning => filled(palette.warning),
        ButtonVariant::Secondary => ButtonLook {
            text: Style::default().fg(palette.text_primary).bg(palette.border_dim),
            border: Some(Style::default().fg(palette.border)),
        },
        ButtonVariant::Outline => ButtonLook {
            text: Style::default().fg(palette.accent),
            border: Some(Style::default().fg(palette.accent)),
        },
        ButtonVariant::Link => ButtonLook {
            text: Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::UNDERLINED),
            border: None,
        },
        ButtonVariant::Icon => ButtonLook {
            text: Style::default().fg(palette.text_secondary),
            border: None,
        },
        ButtonVariant::Nav => ButtonLook {
            text: if button.is_active {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_secondary)
            },
            border: None,
        },
        ButtonVariant::Toggle => {
            if button.is_active {
                filled(palette.accent)
            } else {
                ButtonLook {
                    text: Style::default().fg(palette.text_secondary).bg(palette.border_dim),
                    border: Some(Style::default().fg(palette.border)),
                }
            }
        }
        ButtonVariant::Custom => ButtonLook {
            text: palette.body(),
            border: Some(palette.border()),
        },
    }
}

/// Draw the button into `area`. `tick` drives the loading spinner and is
/// ignored otherwise.
pub fn render(frame: &mut Frame, area: Rect, button: &Button, palette: &Palette, tick: u64) {
    let look = look(button, palette);

    let label: String = if button.is_loading {
        let text = button
            .loading_text
            .as_deref()
            .unwrap_or(button.label.as_str());
        format!("{} {}", loading::glyph(LoadingVariant::Spinner, tick), text)
    } else {
        button.label.clone()
    };

    let mut paragraph = Paragraph::new(Line::from(label)).centered().style(look.text);

    if let Some(border_style) = look.border {
        let border_type = if button.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        paragraph = paragraph.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(if button.focused {
                    palette.border_focused()
                } else {
                    border_style
                }),
        );
    }

    frame.render_widget(paragraph, area);
}
