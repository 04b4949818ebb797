//! Dropdown select.
//!
//! Options carry an opaque `value` handed back to the host on commit and
//! a display `label`. A placeholder, when present and nothing is chosen,
//! occupies the first entry of the list as a disabled row; it can be
//! seen but never committed.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph};

use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectSize {
    #[default]
    Default,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            selected: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Select {
    pub options: Vec<SelectOption>,
    pub placeholder: Option<String>,
    pub label: Option<String>,
    pub error: Option<String>,
    pub helper_text: Option<String>,
    pub size: SelectSize,
    pub focused: bool,
}

impl Select {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
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

    pub fn with_size(mut self, size: SelectSize) -> Self {
        self.size = size;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Index of the option flagged `selected`, if any.
    fn preselected(&self) -> Option<usize> {
        self.options.iter().position(|o| o.selected)
    }
}

/// One row of the opened list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEntry<'a> {
    /// Disabled first entry standing in for "nothing chosen yet".
    Placeholder(&'a str),
    Option(&'a SelectOption),
}

impl SelectEntry<'_> {
    pub fn is_disabled(&self) -> bool {
        match self {
            SelectEntry::Placeholder(_) => true,
            SelectEntry::Option(o) => o.disabled,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SelectEntry::Placeholder(p) => p,
            SelectEntry::Option(o) => &o.label,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectState {
    pub open: bool,
    pub highlighted: usize,
    pub chosen: Option<usize>,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed option, resolved against `select`'s options. Falls
    /// back to the option flagged `selected` when nothing was committed.
    pub fn chosen_option<'a>(&self, select: &'a Select) -> Option<&'a SelectOption> {
        self.chosen
            .or_else(|| select.preselected())
            .and_then(|i| select.options.get(i))
    }

    /// Visible rows when the list is open: the placeholder first (only
    /// while nothing is chosen), then every option in order.
    pub fn entries<'a>(&self, select: &'a Select) -> Vec<SelectEntry<'a>> {
        let mut entries = Vec::with_capacity(select.options.len() + 1);
        if self.chosen_option(select).is_none() {
            if let Some(placeholder) = &select.placeholder {
                entries.push(SelectEntry::Placeholder(placeholder));
            }
        }
        entries.extend(select.options.iter().map(SelectEntry::Option));
        entries
    }

    fn move_highlight(&mut self, select: &Select, delta: isize) {
        let entries = self.entries(select);
        if entries.is_empty() {
            return;
        }
        let len = entries.len() as isize;
        let mut idx = self.highlighted as isize;
        // Skip disabled rows; give up after one full cycle.
        for _ in 0..entries.len() {
            idx = (idx + delta).rem_euclid(len);
            if !entries[idx as usize].is_disabled() {
                self.highlighted = idx as usize;
                return;
            }
        }
    }

    /// Apply a key event. Returns the committed value when Enter lands on
    /// an enabled option.
    pub fn handle_key(&mut self, select: &Select, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Enter if !self.open => {
                self.open = true;
                // Start on the current choice, else the first enabled row.
                if let Some(idx) = self.chosen.or_else(|| select.preselected()) {
                    self.highlighted = idx;
                } else {
                    self.highlighted = 0;
                    if self
                        .entries(select)
                        .first()
                        .is_some_and(|e| e.is_disabled())
                    {
                        self.move_highlight(select, 1);
                    }
                }
                None
            }
            KeyCode::Enter => {
                let entries = self.entries(select);
                let entry = entries.get(self.highlighted)?;
                if entry.is_disabled() {
                    return None;
                }
                let placeholder_rows = entries.len() - select.options.len();
                let option_index = self.highlighted - placeholder_rows;
                self.chosen = Some(option_index);
                self.open = false;
                Some(select.options[option_index].value.clone())
            }
            KeyCode::Esc if self.open => {
                self.open = false;
                None
            }
            KeyCode::Up if self.open => {
                self.move_highlight(select, -1);
                None
            }
            KeyCode::Down if self.open => {
                self.move_highlight(select, 1);
                None
            }
            _ => None,
        }
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    select: &Select,
    state: &SelectState,
    palette: &Palette,
) {
    let mut y = area.y;

    if let Some(label) = &select.label {
        frame.render_widget(
            Paragraph::new(label.as_str()).style(palette.label()),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }

    let border_style = if select.error.is_some() {
        palette.error_text()
    } else if select.focused {
        palette.border_focused()
    } else {
        palette.border()
    };

    let field_h = match select.size {
        SelectSize::Default => 3u16,
        SelectSize::Small => 1,
    };
    let field_area = Rect::new(area.x, y, area.width, field_h);
    y += field_h;

    let (shown, shown_style) = match state.chosen_option(select) {
        Some(option) => (option.label.as_str(), palette.body()),
        None => (
            select.placeholder.as_deref().unwrap_or(""),
            palette.muted(),
        ),
    };
    let arrow = if state.open { "▲" } else { "▼" };
    let line = Line::from(vec![
        Span::styled(shown.to_string(), shown_style),
        Span::raw(" "),
        Span::styled(arrow.to_string(), palette.muted()),
    ]);

    match select.size {
        SelectSize::Default => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style);
            let inner = block.inner(field_area);
            frame.render_widget(block, field_area);
            frame.render_widget(Paragraph::new(line), inner);
        }
        SelectSize::Small => {
            frame.render_widget(Paragraph::new(line), field_area);
        }
    }

    if let Some(error) = &select.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(palette.error_text()),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    } else if let Some(helper) = &select.helper_text {
        frame.render_widget(
            Paragraph::new(helper.as_str()).style(palette.helper_text()),
            Rect::new(area.x, y, area.width, 1),
        );
        y += 1;
    }

    if state.open {
        let entries = state.entries(select);
        let list_h = (entries.len() as u16 + 2).min(area.height.saturating_sub(y - area.y));
        let list_area = Rect::new(area.x, y, area.width, list_h);
        frame.render_widget(Clear, list_area);

        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == state.highlighted && !entry.is_disabled() {
                    palette.selection()
                } else if entry.is_disabled() {
                    palette.muted()
                } else {
                    palette.body()
                };
                ListItem::new(Span::styled(entry.label().to_string(), style))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border_focused())
                .style(palette.surface_bg()),
        );
        frame.render_widget(list, list_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn country_select() -> Select {
        Select::new(vec![SelectOption::new("mx", "México")]).with_placeholder("Selecciona")
    }

    #[test]
    fn test_placeholder_is_disabled_first_entry_when_unchosen() {
        let select = country_select();
        let state = SelectState::new();
        let entries = state.entries(&select);
        assert_eq!(entries[0], SelectEntry::Placeholder("Selecciona"));
        assert!(entries[0].is_disabled());
        assert_eq!(entries[1].label(), "México");
    }

    #[test]
    fn test_placeholder_row_disappears_after_commit() {
        let select = country_select();
        let mut state = SelectState::new();
        state.handle_key(&select, key(KeyCode::Enter)); // open
        let committed = state.handle_key(&select, key(KeyCode::Enter));
        assert_eq!(committed.as_deref(), Some("mx"));
        assert_eq!(state.entries(&select).len(), 1);
    }

    #[test]
    fn test_open_skips_disabled_placeholder() {
        let select = country_select();
        let mut state = SelectState::new();
        state.handle_key(&select, key(KeyCode::Enter));
        assert!(state.open);
        // Highlight must land on the first enabled row, not the
        // placeholder.
        assert_eq!(state.highlighted, 1);
    }

    #[test]
    fn test_enter_on_disabled_option_commits_nothing() {
        let select = Select::new(vec![
            SelectOption::new("a", "A").disabled(true),
            SelectOption::new("b", "B"),
        ]);
        let mut state = SelectState::new();
        state.handle_key(&select, key(KeyCode::Enter));
        state.highlighted = 0;
        assert_eq!(state.handle_key(&select, key(KeyCode::Enter)), None);
        assert!(state.chosen.is_none());
    }

    #[test]
    fn test_navigation_wraps_and_skips_disabled() {
        let select = Select::new(vec![
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B").disabled(true),
            SelectOption::new("c", "C"),
        ]);
        let mut state = SelectState::new();
        state.open = true;
        state.highlighted = 0;
        state.handle_key(&select, key(KeyCode::Down));
        assert_eq!(state.highlighted, 2);
        state.handle_key(&select, key(KeyCode::Down));
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_preselected_option_shows_as_choice() {
        let select = Select::new(vec![
            SelectOption::new("a", "A"),
            SelectOption::new("b", "B").selected(true),
        ]);
        let state = SelectState::new();
        assert_eq!(state.chosen_option(&select).unwrap().value, "b");
    }

    #[test]
    fn test_render_shows_placeholder_in_field() {
        let select = country_select();
        let state = SelectState::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &select, &state, &Palette::light()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Selecciona"));
    }
}
