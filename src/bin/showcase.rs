//! Interactive tour of every crabkit component.
//!
//! Tab/Shift-Tab switch pages, `t` (or Ctrl-T on editing pages) toggles
//! the theme through the store, Ctrl-C quits anywhere. Each page lists
//! its own keys in the status bar.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crabkit::alert::{
    self, AlertBackend, AlertInputKind, AlertKind, AlertOutcome, AlertView, Toast,
};
use crabkit::modal::{self, Modal, ModalController, ModalHandle};
use crabkit::theme::toggle::{self, ThemeToggle};
use crabkit::theme::{Palette, ThemeStore};
use crabkit::widgets::{
    button, input, loading, select, table, textarea, Button, ButtonVariant, Form, FormVariant,
    InputVariant, Loading, LoadingColor, LoadingSize, LoadingVariant, Select, SelectOption,
    SelectSize, SelectState, Table, TableVariant, TextArea, TextAreaSize, TextAreaState,
    TextAreaVariant, TextInput, TextInputState,
};

const TICK_RATE: Duration = Duration::from_millis(50);

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Buttons,
    Inputs,
    Selects,
    Tables,
    TextAreas,
    Forms,
    Loaders,
    Modals,
    Alerts,
}

impl Page {
    const ALL: [Page; 9] = [
        Page::Buttons,
        Page::Inputs,
        Page::Selects,
        Page::Tables,
        Page::TextAreas,
        Page::Forms,
        Page::Loaders,
        Page::Modals,
        Page::Alerts,
    ];

    fn title(self) -> &'static str {
        match self {
            Page::Buttons => "Buttons",
            Page::Inputs => "Inputs",
            Page::Selects => "Select",
            Page::Tables => "Table",
            Page::TextAreas => "TextArea",
            Page::Forms => "Form",
            Page::Loaders => "Loading",
            Page::Modals => "Modal",
            Page::Alerts => "Alerts",
        }
    }

    /// Pages where plain characters belong to an editor.
    fn is_editing(self) -> bool {
        matches!(self, Page::Inputs | Page::TextAreas | Page::Forms)
    }
}

struct ShowcaseState {
    theme: ThemeStore,
    palette: Palette,
    theme_changes: Rc<Cell<u32>>,
    page: usize,
    tick: u64,

    name_input: TextInputState,
    password_input: TextInputState,
    input_focus: usize,

    select: Select,
    select_state: SelectState,
    chosen_country: Option<String>,

    textarea_state: TextAreaState,

    form_field: TextInputState,
    submissions: u32,

    modal: Option<ModalController>,
    modal_handle: Option<ModalHandle>,
    modal_closes: Rc<Cell<u32>>,

    toasts: Vec<Toast>,
    status: String,

    dirty: bool,
    should_quit: bool,
}

impl ShowcaseState {
    fn new(mut theme: ThemeStore) -> Self {
        let theme_changes = Rc::new(Cell::new(0));
        let counter = theme_changes.clone();
        theme.subscribe(move |mode| {
            counter.set(counter.get() + 1);
            tracing::debug!("showcase saw theme change to {mode}");
        });

        let palette = theme.palette();
        Self {
            theme,
            palette,
            theme_changes,
            page: 0,
            tick: 0,
            name_input: TextInputState::new(),
            password_input: TextInputState::new(),
            input_focus: 0,
            select: Select::new(vec![
                SelectOption::new("mx", "México"),
                SelectOption::new("ar", "Argentina"),
                SelectOption::new("cl", "Chile"),
                SelectOption::new("xx", "Atlantis").disabled(true),
            ])
            .with_label("Country")
            .with_placeholder("Selecciona")
            .with_helper_text("Enter opens, arrows move, Enter commits"),
            select_state: SelectState::new(),
            chosen_country: None,
            textarea_state: TextAreaState::with_text("Multi-line editing.\nArrows move, Enter splits."),
            form_field: TextInputState::new(),
            submissions: 0,
            modal: None,
            modal_handle: None,
            modal_closes: Rc::new(Cell::new(0)),
            toasts: Vec::new(),
            status: String::from("Welcome. Tab switches pages"),
            dirty: true,
            should_quit: false,
        }
    }

    fn page(&self) -> Page {
        Page::ALL[self.page]
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.dirty = true;
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.palette = self.theme.palette();
        self.set_status(format!("Theme: {}", self.theme.mode()));
    }

    fn open_modal(&mut self) {
        if self.modal.is_some() {
            return;
        }
        let closes = self.modal_closes.clone();
        let controller = ModalController::new(move || closes.set(closes.get() + 1))
            .with_layer(50);
        self.modal_handle = Some(controller.handle());
        self.modal = Some(controller);
        self.set_status("Modal opened: c closes it, h closes via the handle");
    }
}

fn main() -> Result<()> {
    init_logging()?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    restore_terminal()?;
    result
}

fn init_logging() -> Result<()> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("crabkit");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file = std::fs::File::create(dir.join("showcase.log"))
        .with_context(|| "Failed to create showcase log file")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run(terminal: &mut Term) -> Result<()> {
    let mut state = ShowcaseState::new(ThemeStore::load());
    let mut last_tick = Instant::now();

    terminal.draw(|f| render(f, &state))?;

    loop {
        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut state, key, terminal)?;
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            on_tick(&mut state);
        }

        if state.should_quit {
            break;
        }
        if state.dirty {
            terminal.draw(|f| render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn on_tick(state: &mut ShowcaseState) {
    state.tick += 1;
    let now = Instant::now();

    if let Some(modal) = &mut state.modal {
        modal.tick(now);
        state.dirty = true;
    }
    if state.modal.as_ref().is_some_and(|m| m.is_closed()) {
        state.modal = None;
        state.modal_handle = None;
        let closes = state.modal_closes.get();
        state.set_status(format!("Modal closed ({closes} so far)"));
    }

    let before = state.toasts.len();
    state.toasts.retain_mut(|toast| !toast.tick(now));
    if state.toasts.len() != before {
        state.dirty = true;
    }

    // Animated pages need a redraw every tick.
    if matches!(state.page(), Page::Loaders | Page::Buttons) || !state.toasts.is_empty() {
        state.dirty = true;
    }
}

fn handle_key(state: &mut ShowcaseState, key: KeyEvent, terminal: &mut Term) -> Result<()> {
    // Global keys first.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                state.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('t') => {
                state.toggle_theme();
                return Ok(());
            }
            _ => {}
        }
    }
    match key.code {
        KeyCode::Tab => {
            state.page = (state.page + 1) % Page::ALL.len();
            state.dirty = true;
            return Ok(());
        }
        KeyCode::BackTab => {
            state.page = (state.page + Page::ALL.len() - 1) % Page::ALL.len();
            state.dirty = true;
            return Ok(());
        }
        _ => {}
    }

    if !state.page().is_editing() {
        match key.code {
            KeyCode::Char('q') => {
                state.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('t') => {
                state.toggle_theme();
                return Ok(());
            }
            _ => {}
        }
    }

    match state.page() {
        Page::Inputs => {
            if matches!(key.code, KeyCode::Up | KeyCode::Down) {
                state.input_focus = 1 - state.input_focus;
                state.dirty = true;
            } else {
                let target = if state.input_focus == 0 {
                    &mut state.name_input
                } else {
                    &mut state.password_input
                };
                if target.handle_key(key) {
                    state.dirty = true;
                }
            }
        }
        Page::Selects => {
            let select = state.select.clone();
            if let Some(value) = state.select_state.handle_key(&select, key) {
                state.chosen_country = Some(value.clone());
                state.set_status(format!("Selected {value}"));
            }
            state.dirty = true;
        }
        Page::TextAreas => {
            if state.textarea_state.handle_key(key) {
                state.dirty = true;
            }
        }
        Page::Forms => {
            // The form consumes Enter before the field sees it.
            let form = Form::new(FormVariant::Card);
            let mut submitted = false;
            if form.handle_key(key, || submitted = true) && submitted {
                state.submissions += 1;
                let name = state.form_field.text.clone();
                state.set_status(format!(
                    "Form submitted ({}): {name:?}",
                    state.submissions
                ));
            } else if state.form_field.handle_key(key) {
                state.dirty = true;
            }
        }
        Page::Modals => match key.code {
            KeyCode::Char('o') => state.open_modal(),
            KeyCode::Char('c') | KeyCode::Esc => {
                if let Some(modal) = &mut state.modal {
                    modal.request_close(Instant::now());
                    state.set_status("Close requested through the controller");
                }
            }
            KeyCode::Char('h') => {
                if let Some(handle) = &state.modal_handle {
                    handle.request_close(Instant::now());
                    state.set_status("Close requested through the external handle");
                }
            }
            _ => {}
        },
        Page::Alerts => handle_alert_key(state, key, terminal),
        _ => {}
    }

    Ok(())
}

fn handle_alert_key(state: &mut ShowcaseState, key: KeyEvent, terminal: &mut Term) {
    let mut backend = TuiDialog { terminal };
    let outcome = match key.code {
        KeyCode::Char('1') => {
            let confirmed = Rc::new(Cell::new(false));
            let flag = confirmed.clone();
            let outcome = alert::success(
                &mut backend,
                "Done",
                "Saved",
                Some(Box::new(move || flag.set(true))),
            );
            Some((outcome, confirmed.get()))
        }
        KeyCode::Char('2') => Some((alert::error(&mut backend, "Fallo", "Nothing was saved", None), false)),
        KeyCode::Char('3') => {
            let outcome = alert::warning(
                &mut backend,
                "Sure?",
                "Cannot be undone",
                None,
                None,
            );
            Some((outcome, false))
        }
        KeyCode::Char('4') => Some((alert::confirm(&mut backend, "Continue?", "Your call", None, None), false)),
        KeyCode::Char('5') => Some((alert::info(&mut backend, "Heads up", "Toasts are on n", None), false)),
        KeyCode::Char('n') => {
            state.toasts.push(Toast::new(
                AlertKind::Success,
                "Guardado",
                "Cambios aplicados",
                Instant::now(),
            ));
            state.set_status("Toast fired (auto-dismisses in 3s)");
            None
        }
        _ => None,
    };

    if let Some((outcome, confirm_ran)) = outcome {
        let suffix = if confirm_ran { ", on_confirm ran" } else { "" };
        state.set_status(format!("Outcome: {outcome:?}{suffix}"));
    }
}

/// Blocking dialog backend: draws the resolved alert and runs its own
/// poll/read loop until a button is activated, Esc dismisses, or the
/// auto-dismiss timer expires.
struct TuiDialog<'a> {
    terminal: &'a mut Term,
}

impl TuiDialog<'_> {
    fn buttons(view: &AlertView) -> Vec<(&str, AlertOutcome)> {
        let mut buttons = Vec::new();
        if let Some(label) = &view.confirm_label {
            buttons.push((label.as_str(), AlertOutcome::Confirmed { input: None }));
        }
        if let Some(label) = &view.deny_label {
            buttons.push((label.as_str(), AlertOutcome::Denied));
        }
        if let Some(label) = &view.cancel_label {
            buttons.push((label.as_str(), AlertOutcome::Dismissed));
        }
        buttons
    }
}

impl AlertBackend for TuiDialog<'_> {
    fn present(&mut self, view: AlertView) -> AlertOutcome {
        let deadline = view.timer.map(|t| Instant::now() + t);
        let mut selected = 0usize;
        let mut input = TextInputState::with_text(
            view.input
                .as_ref()
                .and_then(|i| i.initial.as_deref())
                .unwrap_or(""),
        );
        let mut validation: Option<String> = None;

        loop {
            let draw = self.terminal.draw(|f| {
                render_dialog(f, &view, selected, &input, validation.as_deref());
            });
            if draw.is_err() {
                return AlertOutcome::Dismissed;
            }

            let timeout = deadline
                .map(|d| d.saturating_duration_since(Instant::now()))
                .unwrap_or(TICK_RATE);
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return AlertOutcome::Dismissed;
            }

            let ready = event::poll(timeout.min(TICK_RATE)).unwrap_or(false);
            if !ready {
                continue;
            }
            let Ok(Event::Key(key)) = event::read() else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let buttons = Self::buttons(&view);
            match key.code {
                KeyCode::Esc => return AlertOutcome::Dismissed,
                KeyCode::Left if !buttons.is_empty() => {
                    selected = (selected + buttons.len() - 1) % buttons.len();
                }
                KeyCode::Right if !buttons.is_empty() => {
                    selected = (selected + 1) % buttons.len();
                }
                KeyCode::Enter => {
                    let Some((_, outcome)) = buttons.get(selected) else {
                        continue;
                    };
                    if let AlertOutcome::Confirmed { .. } = outcome {
                        if let Some(descriptor) = &view.input {
                            if let Some(validator) = &descriptor.validator {
                                if let Some(message) = validator(&input.text) {
                                    validation = Some(message);
                                    continue;
                                }
                            }
                            return AlertOutcome::Confirmed {
                                input: Some(input.text.clone()),
                            };
                        }
                    }
                    return outcome.clone();
                }
                _ if view.input.is_some() => {
                    if input.handle_key(key) {
                        validation = None;
                    }
                }
                _ => {}
            }
        }
    }
}

fn render_dialog(
    frame: &mut Frame,
    view: &AlertView,
    selected: usize,
    input: &TextInputState,
    validation: Option<&str>,
) {
    use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

    let area = frame.area();
    let palette = Palette::for_mode(view.theme.mode);

    // The dialog loop owns the whole frame while it blocks, so paint a
    // scrim instead of leaving stale content behind.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg)),
        area,
    );

    let w = (area.width / 2).max(30).min(area.width);
    let extra = u16::from(view.input.is_some()) * 3 + u16::from(validation.is_some());
    let h = (9 + extra).min(area.height);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(w)) / 2,
        area.y + (area.height.saturating_sub(h)) / 2,
        w,
        h,
    );

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(view.theme.foreground))
        .style(Style::default().bg(view.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut y = inner.y;
    let title = Line::from(vec![
        Span::styled(
            format!("{} ", view.kind.icon()),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            view.title.clone(),
            Style::default()
                .fg(view.theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).centered(), Rect::new(inner.x, y, inner.width, 1));
    y += 2;

    frame.render_widget(
        Paragraph::new(view.text.clone())
            .style(Style::default().fg(view.theme.foreground))
            .wrap(Wrap { trim: false })
            .centered(),
        Rect::new(inner.x, y, inner.width, 2),
    );
    y += 2;

    if let Some(descriptor) = &view.input {
        let field = TextInput::new()
            .with_variant(InputVariant::Small)
            .with_placeholder(descriptor.placeholder.clone().unwrap_or_default())
            .masked(matches!(descriptor.kind, AlertInputKind::Password))
            .focused(true);
        input::render(
            frame,
            Rect::new(inner.x + 2, y, inner.width.saturating_sub(4), 1),
            &field,
            input,
            &palette,
        );
        y += 2;
    }
    if let Some(message) = validation {
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(palette.danger))
                .centered(),
            Rect::new(inner.x, y, inner.width, 1),
        );
        y += 1;
    }

    let buttons = TuiDialog::buttons(view);
    if !buttons.is_empty() && y < inner.bottom() {
        let spans: Vec<Span> = buttons
            .iter()
            .enumerate()
            .flat_map(|(i, (label, _))| {
                let style = if i == selected {
                    palette.selection()
                } else {
                    Style::default().fg(view.theme.foreground)
                };
                vec![Span::styled(format!("[ {label} ]"), style), Span::raw("  ")]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)).centered(),
            Rect::new(inner.x, inner.bottom() - 1, inner.width, 1),
        );
    }
}

fn render(frame: &mut Frame, state: &ShowcaseState) {
    let palette = &state.palette;
    let area = frame.area();
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(palette.bg)),
        area,
    );

    let [tab_bar, body, status_bar] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_tab_bar(frame, tab_bar, state);

    let body = body.inner(Margin::new(2, 1));
    match state.page() {
        Page::Buttons => render_buttons_page(frame, body, state),
        Page::Inputs => render_inputs_page(frame, body, state),
        Page::Selects => render_select_page(frame, body, state),
        Page::Tables => render_table_page(frame, body, state),
        Page::TextAreas => render_textarea_page(frame, body, state),
        Page::Forms => render_form_page(frame, body, state),
        Page::Loaders => render_loading_page(frame, body, state),
        Page::Modals => render_modal_page(frame, body, state),
        Page::Alerts => render_alerts_page(frame, body, state),
    }

    render_status_bar(frame, status_bar, state);

    // Overlays paint last: the modal, then toasts above it.
    if let (Some(controller), Page::Modals) = (&state.modal, state.page()) {
        let dialog = Modal::new("Demo modal", "This dialog closes 300ms after the request.\nTry c, Esc, or h.")
            .with_footer(Line::from(Span::styled("[ c: close ]", palette.label())));
        modal::render(frame, area, &dialog, controller.phase(), palette);
    }
    for toast in &state.toasts {
        alert::toast::render(frame, area, toast, palette);
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let mut spans = vec![Span::raw(" ")];
    for (i, page) in Page::ALL.iter().enumerate() {
        let style = if i == state.page {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.label()
        };
        spans.push(Span::styled(page.title(), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(
        ratatui::widgets::Paragraph::new(Line::from(spans)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    // Theme hint pinned to the right edge; the real toggle widget is on
    // the Buttons page where it has room for its border.
    if area.width > 14 {
        let hint = format!("t: {}", ThemeToggle::label(state.theme.mode()));
        let hint_area = Rect::new(area.right() - 12, area.y, 11, 1);
        frame.render_widget(
            ratatui::widgets::Paragraph::new(hint).style(palette.muted()),
            hint_area,
        );
    }

    frame.render_widget(
        ratatui::widgets::Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(palette.border_dim)),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let help = match state.page() {
        Page::Modals => "o open · c close · h close via handle",
        Page::Alerts => "1-5 dialogs · n toast",
        Page::Selects => "Enter open/commit · arrows move · Esc close",
        p if p.is_editing() => "type to edit · Ctrl-T theme · Tab next page",
        _ => "t theme · Tab next page · q quit",
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.status), palette.body()),
        Span::styled(
            format!(
                "· mode {} · {} theme changes seen · ",
                state.theme.mode(),
                state.theme_changes.get()
            ),
            palette.muted(),
        ),
        Span::styled(help, palette.muted()),
    ]);
    frame.render_widget(ratatui::widgets::Paragraph::new(line), area);
}

fn render_buttons_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let variants = [
        ("Primary", ButtonVariant::Primary),
        ("Secondary", ButtonVariant::Secondary),
        ("Danger", ButtonVariant::Danger),
        ("Success", ButtonVariant::Success),
        ("Warning", ButtonVariant::Warning),
        ("Outline", ButtonVariant::Outline),
        ("Link", ButtonVariant::Link),
        ("Nav", ButtonVariant::Nav),
        ("Custom", ButtonVariant::Custom),
    ];

    let columns = 3u16;
    let cell_w = area.width / columns;
    for (i, (label, variant)) in variants.iter().enumerate() {
        let col = (i as u16) % columns;
        let row = (i as u16) / columns;
        let cell = Rect::new(
            area.x + col * cell_w,
            area.y + row * 4,
            cell_w.saturating_sub(2),
            3,
        );
        if cell.bottom() > area.bottom() {
            break;
        }
        let is_nav = *variant == ButtonVariant::Nav;
        let button = Button::new(*label).with_variant(*variant).active(is_nav);
        button::render(frame, cell, &button, palette, state.tick);
    }

    // Bottom row: stateful looks.
    let y = area.y + 12;
    if y + 3 <= area.bottom() {
        let loading = Button::new("Submit")
            .with_variant(ButtonVariant::Primary)
            .loading(true)
            .with_loading_text("Saving");
        button::render(
            frame,
            Rect::new(area.x, y, cell_w.saturating_sub(2), 3),
            &loading,
            palette,
            state.tick,
        );

        let disabled = Button::new("Disabled").disabled(true);
        button::render(
            frame,
            Rect::new(area.x + cell_w, y, cell_w.saturating_sub(2), 3),
            &disabled,
            palette,
            state.tick,
        );

        // The live theme toggle, filled while dark mode is on.
        toggle::render(
            frame,
            Rect::new(area.x + cell_w * 2, y, cell_w.saturating_sub(2), 3),
            &ThemeToggle::new(),
            state.theme.mode(),
            palette,
        );
    }
}

fn render_inputs_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let name = TextInput::new()
        .with_label("Name")
        .with_placeholder("Ada Lovelace")
        .with_helper_text("Up/Down moves focus")
        .focused(state.input_focus == 0);
    let name_h = name.height();
    input::render(
        frame,
        Rect::new(area.x, area.y, area.width.min(48), name_h),
        &name,
        &state.name_input,
        palette,
    );

    let too_short = !state.password_input.text.is_empty()
        && state.password_input.text.chars().count() < 8;
    let mut password = TextInput::new()
        .with_label("Password")
        .masked(true)
        .with_helper_text("At least 8 characters")
        .focused(state.input_focus == 1);
    if too_short {
        password = password.with_error("At least 8 characters");
    }
    input::render(
        frame,
        Rect::new(area.x, area.y + name_h + 1, area.width.min(48), password.height()),
        &password,
        &state.password_input,
        palette,
    );

    let small = TextInput::new()
        .with_label("Small variant")
        .with_variant(InputVariant::Small)
        .with_placeholder("borderless");
    input::render(
        frame,
        Rect::new(area.x, area.y + name_h + 7, area.width.min(48), small.height()),
        &small,
        &TextInputState::new(),
        palette,
    );
}

fn render_select_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let select = state.select.clone().focused(true);
    select::render(
        frame,
        Rect::new(area.x, area.y, area.width.min(40), area.height),
        &select,
        &state.select_state,
        palette,
    );

    if let Some(value) = &state.chosen_country {
        let y = area.bottom().saturating_sub(1);
        frame.render_widget(
            ratatui::widgets::Paragraph::new(format!("committed value: {value}"))
                .style(palette.muted()),
            Rect::new(area.x, y, area.width, 1),
        );
    }

    let small = Select::new(vec![
        SelectOption::new("s", "Small"),
        SelectOption::new("m", "Medium").selected(true),
    ])
    .with_label("Size (small variant)")
    .with_size(SelectSize::Small);
    if area.width > 66 {
        select::render(
            frame,
            Rect::new(area.x + 44, area.y, 22, area.height),
            &small,
            &SelectState::new(),
            palette,
        );
    }
}

fn render_table_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let status = |ok: bool| {
        if ok {
            Line::from(Span::styled("● active", Style::default().fg(palette.success)))
        } else {
            Line::from(Span::styled("● retired", Style::default().fg(palette.danger)))
        }
    };
    let table = Table::new(
        vec![Line::from("Component"), Line::from("Variants"), Line::from("Status")],
        vec![
            vec![Line::from("Button"), Line::from("11"), status(true)],
            vec![Line::from("Select"), Line::from("2"), status(true)],
            vec![Line::from("Marquee"), Line::from("1"), status(false)],
            vec![Line::from("Loading"), Line::from("6"), status(true)],
        ],
    )
    .with_highlight_row(0);
    table::render(
        frame,
        Rect::new(area.x, area.y, area.width, area.height.min(10)),
        &table,
        palette,
    );

    if area.height > 13 {
        let custom = Table::new(
            vec![Line::from("Custom variant")],
            vec![vec![Line::from("no chrome, no zebra")]],
        )
        .with_variant(TableVariant::Custom);
        table::render(
            frame,
            Rect::new(area.x, area.y + 11, area.width, area.height - 11),
            &custom,
            palette,
        );
    }
}

fn render_textarea_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let textarea = TextArea::new()
        .with_label("Notes")
        .with_helper_text("Backspace at column 0 joins lines")
        .focused(true);
    textarea::render(
        frame,
        Rect::new(area.x, area.y, area.width.min(56), textarea.height()),
        &textarea,
        &state.textarea_state,
        palette,
    );

    let filled = TextArea::new()
        .with_label("Filled variant")
        .with_variant(TextAreaVariant::Filled)
        .with_size(TextAreaSize::Small);
    let y = area.y + textarea.height() + 1;
    if y + filled.height() <= area.bottom() {
        textarea::render(
            frame,
            Rect::new(area.x, y, area.width.min(56), filled.height()),
            &filled,
            &TextAreaState::with_text("read-only preview"),
            palette,
        );
    }
}

fn render_form_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let form = Form::new(FormVariant::Card).with_title("Sign up");
    let chrome = Rect::new(area.x, area.y, area.width.min(50), area.height.min(12));
    let inner = form.render_chrome(frame, chrome, palette);

    let field = TextInput::new()
        .with_label("Name")
        .with_placeholder("required")
        .focused(true);
    let rects = form.layout(inner, &[field.height(), 1]);
    if let Some(rect) = rects.first() {
        input::render(frame, *rect, &field, &state.form_field, palette);
    }
    if let Some(rect) = rects.get(1) {
        frame.render_widget(
            ratatui::widgets::Paragraph::new(format!(
                "Enter submits (never reaches the field): {} so far",
                state.submissions
            ))
            .style(palette.muted()),
            *rect,
        );
    }
}

fn render_loading_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let demos = [
        (LoadingVariant::Spinner, LoadingColor::Primary, "spinner"),
        (LoadingVariant::Dots, LoadingColor::Gray, "dots"),
        (LoadingVariant::Pulse, LoadingColor::Success, "pulse"),
        (LoadingVariant::Bars, LoadingColor::Warning, "bars"),
        (LoadingVariant::Ring, LoadingColor::Danger, "ring"),
        (LoadingVariant::Cube, LoadingColor::Primary, "cube"),
    ];
    let columns = 3u16;
    let cell_w = area.width / columns;
    for (i, (variant, color, label)) in demos.iter().enumerate() {
        let col = (i as u16) % columns;
        let row = (i as u16) / columns;
        let cell = Rect::new(area.x + col * cell_w, area.y + row * 3, cell_w, 2);
        if cell.bottom() > area.bottom() {
            break;
        }
        let loading = Loading::new(*variant)
            .with_color(*color)
            .with_label(*label)
            .with_size(if i >= 3 { LoadingSize::Large } else { LoadingSize::Medium });
        loading::render(frame, cell, &loading, palette, state.tick / 2);
    }
}

fn render_modal_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let phase = state
        .modal
        .as_ref()
        .map(|m| format!("{:?}", m.phase()))
        .unwrap_or_else(|| "none".to_string());
    let lines = vec![
        Line::from(Span::styled("Modal lifecycle", palette.title())),
        Line::from(""),
        Line::from(Span::styled(
            "o opens a controller; c or Esc asks it to close; h asks",
            palette.body(),
        )),
        Line::from(Span::styled(
            "through the external handle. Both paths share one state",
            palette.body(),
        )),
        Line::from(Span::styled(
            "machine, so the close callback fires exactly once.",
            palette.body(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("controller: ", palette.label()),
            Span::styled(phase, palette.body()),
            Span::styled(
                format!("   closed {} times", state.modal_closes.get()),
                palette.muted(),
            ),
        ]),
    ];
    frame.render_widget(ratatui::widgets::Paragraph::new(lines), area);
}

fn render_alerts_page(frame: &mut Frame, area: Rect, state: &ShowcaseState) {
    let palette = &state.palette;
    let lines = vec![
        Line::from(Span::styled("Dialogs & toasts", palette.title())),
        Line::from(""),
        Line::from(Span::styled("1 success   2 error   3 warning", palette.body())),
        Line::from(Span::styled("4 question  5 info    n toast", palette.body())),
        Line::from(""),
        Line::from(Span::styled(
            "Dialogs snapshot the theme when they open; toggle the",
            palette.muted(),
        )),
        Line::from(Span::styled(
            "theme afterwards and reopen to see the other tokens.",
            palette.muted(),
        )),
    ];
    frame.render_widget(ratatui::widgets::Paragraph::new(lines), area);
}
