//! Modal popup rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use super::ModalPhase;
use crate::theme::Palette;

/// Visual configuration for one dialog. The lifecycle lives in
/// [`ModalController`](super::ModalController); this struct only decides
/// what the popup looks like.
#[derive(Debug, Clone)]
pub struct Modal<'a> {
    pub title: String,
    pub body: Text<'a>,
    pub footer: Option<Line<'a>>,
    pub show_close_button: bool,
    /// Popup width as a percentage of the host area.
    pub width_percent: u16,
}

impl<'a> Modal<'a> {
    pub fn new(title: impl Into<String>, body: impl Into<Text<'a>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            footer: None,
            show_close_button: true,
            width_percent: 60,
        }
    }

    pub fn with_footer(mut self, footer: Line<'a>) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    pub fn with_width_percent(mut self, percent: u16) -> Self {
        self.width_percent = percent.clamp(20, 100);
        self
    }
}

fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let w = (area.width * width_percent / 100)
        .max(20)
        .min(area.width.saturating_sub(4).max(20));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Draw the popup. `Opening` and `Closing` render with muted chrome so
/// the transition is visible between ticks; `Closed` draws nothing.
pub fn render(frame: &mut Frame, area: Rect, modal: &Modal, phase: ModalPhase, palette: &Palette) {
    if phase == ModalPhase::Closed {
        return;
    }
    let transitioning = matches!(phase, ModalPhase::Opening | ModalPhase::Closing);

    // header + body + optional footer + borders
    let body_h = modal.body.height() as u16;
    let popup_h = 2 + 2 + body_h + if modal.footer.is_some() { 2 } else { 0 };
    let popup = centered(area, modal.width_percent, popup_h);

    frame.render_widget(Clear, popup);

    let border_style = if transitioning {
        Style::default().fg(palette.border_dim)
    } else {
        palette.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(palette.surface_bg());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height == 0 {
        return;
    }

    // Header: title left, close affordance right.
    let header_area = Rect::new(inner.x, inner.y, inner.width, 1);
    let title_style = if transitioning {
        palette.muted()
    } else {
        palette.title()
    };
    frame.render_widget(
        Paragraph::new(modal.title.as_str()).style(title_style),
        header_area,
    );
    if modal.show_close_button && inner.width >= 3 {
        let close_area = Rect::new(inner.right() - 3, inner.y, 3, 1);
        frame.render_widget(
            Paragraph::new(" ✕ ").style(palette.muted()),
            close_area,
        );
    }

    if inner.height > 1 {
        let sep_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        frame.render_widget(
            Paragraph::new("─".repeat(inner.width as usize))
                .style(Style::default().fg(palette.border_dim)),
            sep_area,
        );
    }

    let footer_rows = if modal.footer.is_some() { 2u16 } else { 0 };
    if inner.height > 2 + footer_rows {
        let body_area = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height - 2 - footer_rows,
        );
        let body_style = if transitioning {
            palette.muted()
        } else {
            palette.body()
        };
        frame.render_widget(
            Paragraph::new(modal.body.clone())
                .style(body_style)
                .wrap(Wrap { trim: false }),
            body_area,
        );
    }

    if let Some(footer) = &modal.footer {
        if inner.height >= 2 {
            let footer_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
            frame.render_widget(
                Paragraph::new(footer.clone()).right_aligned(),
                footer_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(modal: &Modal, phase: ModalPhase) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), modal, phase, &Palette::light()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_open_modal_shows_title_body_and_close() {
        let modal = Modal::new("Confirm", "Are you sure?");
        let text = draw(&modal, ModalPhase::Open);
        assert!(text.contains("Confirm"));
        assert!(text.contains("Are you sure?"));
        assert!(text.contains('✕'));
    }

    #[test]
    fn test_close_button_can_be_hidden() {
        let modal = Modal::new("Note", "body").show_close_button(false);
        assert!(!draw(&modal, ModalPhase::Open).contains('✕'));
    }

    #[test]
    fn test_closed_modal_draws_nothing() {
        let modal = Modal::new("Gone", "nothing");
        assert!(!draw(&modal, ModalPhase::Closed).contains("Gone"));
    }

    #[test]
    fn test_footer_renders() {
        let modal = Modal::new("T", "b").with_footer(Line::from("[ OK ]"));
        assert!(draw(&modal, ModalPhase::Open).contains("[ OK ]"));
    }
}
