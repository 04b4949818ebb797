//! Decorative loading indicators.
//!
//! Purely presentational: the caller supplies a frame counter (the
//! showcase feeds its tick count) and the indicator picks the matching
//! animation frame. No indicator owns any state or timer.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingVariant {
    #[default]
    Spinner,
    Dots,
    Pulse,
    Bars,
    Ring,
    Cube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingSize {
    Small,
    #[default]
    Medium,
    Large,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingColor {
    #[default]
    Primary,
    White,
    Gray,
    Success,
    Danger,
    Warning,
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DOTS_FRAMES: [&str; 4] = ["   ", ".  ", ".. ", "..."];
const PULSE_FRAMES: [&str; 4] = ["●", "◉", "○", "◉"];
const BARS_FRAMES: [&str; 4] = ["▁▃▅", "▃▅▇", "▅▇▅", "▇▅▃"];
const RING_FRAMES: [&str; 4] = ["◜", "◝", "◞", "◟"];
const CUBE_FRAMES: [&str; 4] = ["◰", "◳", "◲", "◱"];

#[derive(Debug, Clone, Default)]
pub struct Loading {
    pub variant: LoadingVariant,
    pub size: LoadingSize,
    pub color: LoadingColor,
    pub label: Option<String>,
}

impl Loading {
    pub fn new(variant: LoadingVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: LoadingSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: LoadingColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Animation frame for a variant at tick `frame`.
pub fn glyph(variant: LoadingVariant, frame: u64) -> &'static str {
    let pick = |frames: &'static [&'static str]| frames[(frame as usize) % frames.len()];
    match variant {
        LoadingVariant::Spinner => pick(&SPINNER_FRAMES),
        LoadingVariant::Dots => pick(&DOTS_FRAMES),
        LoadingVariant::Pulse => pick(&PULSE_FRAMES),
        LoadingVariant::Bars => pick(&BARS_FRAMES),
        LoadingVariant::Ring => pick(&RING_FRAMES),
        LoadingVariant::Cube => pick(&CUBE_FRAMES),
    }
}

fn color_token(color: LoadingColor, palette: &Palette) -> Color {
    match color {
        LoadingColor::Primary => palette.accent,
        LoadingColor::White => Color::White,
        LoadingColor::Gray => palette.text_muted,
        LoadingColor::Success => palette.success,
        LoadingColor::Danger => palette.danger,
        LoadingColor::Warning => palette.warning,
    }
}

fn repeat_for_size(size: LoadingSize) -> usize {
    match size {
        LoadingSize::Small | LoadingSize::Medium => 1,
        LoadingSize::Large => 2,
        LoadingSize::Xl => 3,
    }
}

pub fn render(frame: &mut Frame, area: Rect, loading: &Loading, palette: &Palette, tick: u64) {
    let style = Style::default().fg(color_token(loading.color, palette));
    let glyph = glyph(loading.variant, tick).repeat(repeat_for_size(loading.size));

    let mut spans = vec![Span::styled(glyph, style)];
    if let Some(label) = &loading.label {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label.clone(), palette.label()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_cycles() {
        assert_eq!(glyph(LoadingVariant::Spinner, 0), SPINNER_FRAMES[0]);
        assert_eq!(
            glyph(LoadingVariant::Spinner, SPINNER_FRAMES.len() as u64),
            SPINNER_FRAMES[0]
        );
        assert_eq!(glyph(LoadingVariant::Ring, 5), RING_FRAMES[1]);
    }

    #[test]
    fn test_every_variant_has_frames() {
        for variant in [
            LoadingVariant::Spinner,
            LoadingVariant::Dots,
            LoadingVariant::Pulse,
            LoadingVariant::Bars,
            LoadingVariant::Ring,
            LoadingVariant::Cube,
        ] {
            assert!(!glyph(variant, 3).is_empty());
        }
    }
}
