//! Corner toasts.
//!
//! A toast is the non-blocking presentation of an alert: no buttons, an
//! auto-dismiss deadline, and a corner position. The deadline is owned by
//! the `Toast` value itself; dropping the toast cancels it, and expiry
//! is reported exactly once so the host removes it on that tick.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use std::time::{Duration, Instant};

use super::{AlertKind, TOAST_TIMER};
use crate::theme::Palette;

/// Where an overlay sits within the host area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    Top,
    TopStart,
    #[default]
    TopEnd,
    Center,
    CenterStart,
    CenterEnd,
    Bottom,
    BottomStart,
    BottomEnd,
}

#[derive(Debug)]
pub struct Toast {
    pub kind: AlertKind,
    pub title: String,
    pub text: String,
    pub position: ToastPosition,
    deadline: Instant,
    expired: bool,
}

impl Toast {
    /// Create a toast shown from `now`, auto-dismissing after the
    /// default timer.
    pub fn new(kind: AlertKind, title: impl Into<String>, text: impl Into<String>, now: Instant) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
            position: ToastPosition::default(),
            deadline: now + TOAST_TIMER,
            expired: false,
        }
    }

    pub fn with_duration(mut self, duration: Duration, now: Instant) -> Self {
        self.deadline = now + duration;
        self
    }

    pub fn at_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// True exactly once: on the first tick at or past the deadline.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.expired || now < self.deadline {
            return false;
        }
        self.expired = true;
        true
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

fn anchored(area: Rect, position: ToastPosition, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    let left = area.x + 1;
    let center_x = area.x + (area.width.saturating_sub(w)) / 2;
    let right = area.right().saturating_sub(w + 1).max(area.x);
    let top = area.y + 1;
    let center_y = area.y + (area.height.saturating_sub(h)) / 2;
    let bottom = area.bottom().saturating_sub(h + 1).max(area.y);

    let (x, y) = match position {
        ToastPosition::Top => (center_x, top),
        ToastPosition::TopStart => (left, top),
        ToastPosition::TopEnd => (right, top),
        ToastPosition::Center => (center_x, center_y),
        ToastPosition::CenterStart => (left, center_y),
        ToastPosition::CenterEnd => (right, center_y),
        ToastPosition::Bottom => (center_x, bottom),
        ToastPosition::BottomStart => (left, bottom),
        ToastPosition::BottomEnd => (right, bottom),
    };
    Rect::new(x, y, w, h)
}

fn accent(kind: AlertKind, palette: &Palette) -> Color {
    match kind {
        AlertKind::Success => palette.success,
        AlertKind::Error => palette.danger,
        AlertKind::Warning => palette.warning,
        AlertKind::Info | AlertKind::Question => palette.info,
    }
}

pub fn render(frame: &mut Frame, area: Rect, toast: &Toast, palette: &Palette) {
    if toast.expired {
        return;
    }

    let w = (toast.title.len().max(toast.text.len()) as u16 + 6).min(area.width / 2).max(24);
    let rect = anchored(area, toast.position, w, 4);

    frame.render_widget(Clear, rect);

    let color = accent(toast.kind, palette);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(palette.surface_bg());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", toast.kind.icon()), Style::default().fg(color)),
            Span::styled(toast.title.clone(), palette.title()),
        ]),
        Line::from(Span::styled(toast.text.clone(), palette.label())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_once_at_deadline() {
        let t = Instant::now();
        let mut toast = Toast::new(AlertKind::Info, "Hi", "there", t);

        assert!(!toast.tick(t + TOAST_TIMER - Duration::from_millis(1)));
        assert!(toast.tick(t + TOAST_TIMER));
        assert!(!toast.tick(t + TOAST_TIMER + Duration::from_secs(1)));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_custom_duration() {
        let t = Instant::now();
        let mut toast = Toast::new(AlertKind::Success, "Hi", "", t)
            .with_duration(Duration::from_millis(100), t);
        assert!(!toast.tick(t + Duration::from_millis(99)));
        assert!(toast.tick(t + Duration::from_millis(100)));
    }

    #[test]
    fn test_default_position_is_top_end_corner() {
        let t = Instant::now();
        let toast = Toast::new(AlertKind::Info, "Hi", "", t);
        assert_eq!(toast.position, ToastPosition::TopEnd);

        let area = Rect::new(0, 0, 80, 24);
        let rect = anchored(area, toast.position, 24, 4);
        assert_eq!(rect.y, 1);
        assert_eq!(rect.right(), 79);
    }

    #[test]
    fn test_anchors_stay_inside_area() {
        let area = Rect::new(0, 0, 30, 8);
        for position in [
            ToastPosition::Top,
            ToastPosition::TopStart,
            ToastPosition::TopEnd,
            ToastPosition::Center,
            ToastPosition::CenterStart,
            ToastPosition::CenterEnd,
            ToastPosition::Bottom,
            ToastPosition::BottomStart,
            ToastPosition::BottomEnd,
        ] {
            let rect = anchored(area, position, 24, 4);
            assert!(rect.right() <= area.right(), "{position:?}");
            assert!(rect.bottom() <= area.bottom(), "{position:?}");
        }
    }

    #[test]
    fn test_expired_toast_renders_nothing() {
        use ratatui::backend::TestBackend;
        use ratatui::Terminal;

        let t = Instant::now();
        let mut toast = Toast::new(AlertKind::Info, "Bye", "", t);
        toast.tick(t + TOAST_TIMER);

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &toast, &Palette::light()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!text.contains("Bye"));
    }
}
