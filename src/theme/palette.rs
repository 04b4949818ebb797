use ratatui::style::{Color, Modifier, Style};

use super::ThemeMode;

/// Color tokens for one theme mode.
///
/// Every widget renders from a `&Palette`; nothing reads terminal colors
/// or globals at paint time, so the same props render identically under
/// the same palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub info: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(249, 250, 251),
            surface: Color::Rgb(255, 255, 255),
            text_primary: Color::Rgb(31, 41, 55),
            text_secondary: Color::Rgb(75, 85, 99),
            text_muted: Color::Rgb(156, 163, 175),
            border: Color::Rgb(209, 213, 219),
            border_dim: Color::Rgb(229, 231, 235),
            accent: Color::Rgb(37, 99, 235),
            success: Color::Rgb(22, 163, 74),
            danger: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(217, 119, 6),
            info: Color::Rgb(8, 145, 178),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(31, 41, 55),
            text_primary: Color::Rgb(249, 250, 251),
            text_secondary: Color::Rgb(209, 213, 219),
            text_muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(75, 85, 99),
            border_dim: Color::Rgb(55, 65, 81),
            accent: Color::Rgb(96, 165, 250),
            success: Color::Rgb(74, 222, 128),
            danger: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 191, 36),
            info: Color::Rgb(34, 211, 238),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.danger)
    }

    pub fn helper_text(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn surface_bg(&self) -> Style {
        Style::default().bg(self.surface)
    }

    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.surface)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_selects_palette() {
        assert_eq!(Palette::for_mode(ThemeMode::Light), Palette::light());
        assert_eq!(Palette::for_mode(ThemeMode::Dark), Palette::dark());
        assert_ne!(Palette::light(), Palette::dark());
    }
}
