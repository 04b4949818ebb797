//! Dialog-style alerts.
//!
//! Presentation itself is delegated to an [`AlertBackend`]: anything
//! that can put a dialog in front of the user and report how it was
//! dismissed. This module owns everything around that call: default
//! button labels, the light/dark token snapshot taken at presentation
//! time, and mapping the outcome to at most one caller callback.

pub mod toast;

pub use toast::{Toast, ToastPosition};

use std::time::Duration;

use crate::theme::{marker, Palette, ThemeMode};

/// Default auto-dismiss for toasts.
pub const TOAST_TIMER: Duration = Duration::from_millis(3000);

const DEFAULT_CONFIRM: &str = "Aceptar";
const DEFAULT_CANCEL: &str = "Cancelar";
const DEFAULT_DENY: &str = "No";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
    Question,
}

impl AlertKind {
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => "✔",
            AlertKind::Error => "✖",
            AlertKind::Warning => "⚠",
            AlertKind::Info => "ℹ",
            AlertKind::Question => "?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertInputKind {
    #[default]
    Text,
    Password,
    Number,
}

/// Validates a dialog input value. A `Some(message)` blocks confirmation
/// and the backend shows the message.
pub type InputValidator = Box<dyn Fn(&str) -> Option<String>>;

/// Single-field input descriptor for prompting dialogs.
pub struct AlertInput {
    pub kind: AlertInputKind,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub initial: Option<String>,
    pub validator: Option<InputValidator>,
}

impl AlertInput {
    pub fn new(kind: AlertInputKind) -> Self {
        Self {
            kind,
            label: None,
            placeholder: None,
            initial: None,
            validator: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    pub fn with_validator(mut self, validator: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }
}

impl std::fmt::Debug for AlertInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertInput")
            .field("kind", &self.kind)
            .field("label", &self.label)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

pub type Callback = Box<dyn FnOnce()>;

/// One-shot description of a dialog to present. Consumed by
/// [`present`]; it has no identity beyond the single presentation.
pub struct AlertRequest {
    pub kind: AlertKind,
    pub title: String,
    pub text: String,
    pub confirm_label: Option<String>,
    pub show_cancel: bool,
    pub cancel_label: Option<String>,
    pub show_deny: bool,
    pub deny_label: Option<String>,
    pub on_confirm: Option<Callback>,
    pub on_cancel: Option<Callback>,
    pub on_deny: Option<Callback>,
    pub toast: bool,
    pub timer: Option<Duration>,
    pub position: Option<ToastPosition>,
    pub input: Option<AlertInput>,
}

impl AlertRequest {
    pub fn new(kind: AlertKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
            confirm_label: None,
            show_cancel: false,
            cancel_label: None,
            show_deny: false,
            deny_label: None,
            on_confirm: None,
            on_cancel: None,
            on_deny: None,
            toast: false,
            timer: None,
            position: None,
            input: None,
        }
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    pub fn with_cancel(mut self, label: impl Into<String>) -> Self {
        self.show_cancel = true;
        self.cancel_label = Some(label.into());
        self
    }

    pub fn with_deny(mut self, label: impl Into<String>) -> Self {
        self.show_deny = true;
        self.deny_label = Some(label.into());
        self
    }

    pub fn on_confirm(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    pub fn on_cancel(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    pub fn on_deny(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_deny = Some(Box::new(callback));
        self
    }

    pub fn as_toast(mut self) -> Self {
        self.toast = true;
        self
    }

    pub fn with_timer(mut self, timer: Duration) -> Self {
        self.timer = Some(timer);
        self
    }

    pub fn at_position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_input(mut self, input: AlertInput) -> Self {
        self.input = Some(input);
        self
    }
}

/// Theme tokens frozen at the moment of presentation. A dialog already
/// on screen keeps these even if the mode flips mid-display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTheme {
    pub mode: ThemeMode,
    pub background: ratatui::style::Color,
    pub foreground: ratatui::style::Color,
}

impl AlertTheme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let palette = Palette::for_mode(mode);
        Self {
            mode,
            background: palette.surface,
            foreground: palette.text_primary,
        }
    }
}

/// Fully-resolved dialog handed to the backend: defaults applied, theme
/// snapshotted, button set final. `confirm_label: None` means the dialog
/// shows no confirm button at all (toasts and timed alerts).
pub struct AlertView {
    pub kind: AlertKind,
    pub title: String,
    pub text: String,
    pub theme: AlertTheme,
    pub confirm_label: Option<String>,
    pub cancel_label: Option<String>,
    pub deny_label: Option<String>,
    pub toast: bool,
    pub timer: Option<Duration>,
    pub position: ToastPosition,
    pub input: Option<AlertInput>,
}

/// How the user left the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertOutcome {
    Confirmed { input: Option<String> },
    Denied,
    Dismissed,
}

/// The opaque dialog collaborator: presents a resolved view and reports
/// the outcome. Implementations enforce the input validator (a
/// non-empty message blocks confirmation) and the auto-dismiss timer.
pub trait AlertBackend {
    fn present(&mut self, view: AlertView) -> AlertOutcome;
}

fn resolve(request: &mut AlertRequest, mode: ThemeMode) -> AlertView {
    let toast = request.toast;
    let suppress_confirm = toast || request.timer.is_some();
    let timer = match (toast, request.timer) {
        (true, None) => Some(TOAST_TIMER),
        (_, timer) => timer,
    };
    let position = request
        .position
        .unwrap_or(if toast { ToastPosition::TopEnd } else { ToastPosition::Center });

    AlertView {
        kind: request.kind,
        title: std::mem::take(&mut request.title),
        text: std::mem::take(&mut request.text),
        theme: AlertTheme::for_mode(mode),
        confirm_label: (!suppress_confirm).then(|| {
            request
                .confirm_label
                .take()
                .unwrap_or_else(|| DEFAULT_CONFIRM.to_string())
        }),
        cancel_label: request.show_cancel.then(|| {
            request
                .cancel_label
                .take()
                .unwrap_or_else(|| DEFAULT_CANCEL.to_string())
        }),
        deny_label: request.show_deny.then(|| {
            request
                .deny_label
                .take()
                .unwrap_or_else(|| DEFAULT_DENY.to_string())
        }),
        toast,
        timer,
        position,
        input: request.input.take(),
    }
}

/// Present `request` through `backend` and route the outcome to at most
/// one of the caller's callbacks.
pub fn present(backend: &mut dyn AlertBackend, mut request: AlertRequest) -> AlertOutcome {
    let view = resolve(&mut request, marker::current());

    let on_confirm = request.on_confirm.take();
    let on_cancel = request.on_cancel.take();
    let on_deny = request.on_deny.take();

    let outcome = backend.present(view);
    match &outcome {
        AlertOutcome::Confirmed { .. } => {
            if let Some(callback) = on_confirm {
                callback();
            }
        }
        AlertOutcome::Denied => {
            if let Some(callback) = on_deny {
                callback();
            }
        }
        AlertOutcome::Dismissed => {
            if let Some(callback) = on_cancel {
                callback();
            }
        }
    }
    outcome
}

/// Acknowledgement dialog with a success icon.
pub fn success(
    backend: &mut dyn AlertBackend,
    title: &str,
    text: &str,
    on_confirm: Option<Callback>,
) -> AlertOutcome {
    let mut request = AlertRequest::new(AlertKind::Success, title, text);
    request.on_confirm = on_confirm;
    present(backend, request)
}

/// Acknowledgement dialog with an error icon.
pub fn error(
    backend: &mut dyn AlertBackend,
    title: &str,
    text: &str,
    on_confirm: Option<Callback>,
) -> AlertOutcome {
    let mut request = AlertRequest::new(AlertKind::Error, title, text);
    request.on_confirm = on_confirm;
    present(backend, request)
}

/// Acknowledgement dialog with an info icon.
pub fn info(
    backend: &mut dyn AlertBackend,
    title: &str,
    text: &str,
    on_confirm: Option<Callback>,
) -> AlertOutcome {
    let mut request = AlertRequest::new(AlertKind::Info, title, text);
    request.on_confirm = on_confirm;
    present(backend, request)
}

/// Destructive-action warning: confirm + cancel.
pub fn warning(
    backend: &mut dyn AlertBackend,
    title: &str,
    text: &str,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
) -> AlertOutcome {
    let mut request = AlertRequest::new(AlertKind::Warning, title, text)
        .confirm_label("Sí, continuar")
        .with_cancel(DEFAULT_CANCEL);
    request.on_confirm = on_confirm;
    request.on_cancel = on_cancel;
    present(backend, request)
}

/// Yes/no question dialog.
pub fn confirm(
    backend: &mut dyn AlertBackend,
    title: &str,
    text: &str,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
) -> AlertOutcome {
    let mut request = AlertRequest::new(AlertKind::Question, title, text)
        .confirm_label("Sí")
        .with_cancel("No");
    request.on_confirm = on_confirm;
    request.on_cancel = on_cancel;
    present(backend, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Backend that records the view it was handed and returns a canned
    /// outcome.
    struct StubBackend {
        outcome: AlertOutcome,
        seen: Option<AlertView>,
    }

    impl StubBackend {
        fn returning(outcome: AlertOutcome) -> Self {
            Self {
                outcome,
                seen: None,
            }
        }

        fn view(&self) -> &AlertView {
            self.seen.as_ref().expect("present was called")
        }
    }

    impl AlertBackend for StubBackend {
        fn present(&mut self, view: AlertView) -> AlertOutcome {
            self.seen = Some(view);
            self.outcome.clone()
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let count = Rc::new(Cell::new(0));
        let sink = count.clone();
        (count, Box::new(move || sink.set(sink.get() + 1)))
    }

    #[test]
    fn test_success_uses_light_tokens_and_default_confirm() {
        let _guard = marker::test_guard();
        marker::apply(ThemeMode::Light);

        let mut backend = StubBackend::returning(AlertOutcome::Confirmed { input: None });
        let (confirmed, on_confirm) = counter();
        let (cancelled, on_cancel) = counter();

        let mut request = AlertRequest::new(AlertKind::Success, "Done", "Saved");
        request.on_confirm = Some(on_confirm);
        request.on_cancel = Some(on_cancel);
        present(&mut backend, request);

        let view = backend.view();
        assert_eq!(view.theme.mode, ThemeMode::Light);
        assert_eq!(view.theme.background, Palette::light().surface);
        assert_eq!(view.confirm_label.as_deref(), Some(DEFAULT_CONFIRM));
        assert_eq!(view.cancel_label, None);
        assert_eq!(confirmed.get(), 1);
        assert_eq!(cancelled.get(), 0);
    }

    #[test]
    fn test_theme_is_snapshotted_at_presentation() {
        let _guard = marker::test_guard();
        marker::apply(ThemeMode::Dark);

        let mut backend = StubBackend::returning(AlertOutcome::Dismissed);
        present(
            &mut backend,
            AlertRequest::new(AlertKind::Info, "Hey", "Now"),
        );
        assert_eq!(backend.view().theme.mode, ThemeMode::Dark);
        assert_eq!(backend.view().theme.background, Palette::dark().surface);
    }

    #[test]
    fn test_warning_cancel_invokes_only_on_cancel() {
        let _guard = marker::test_guard();
        let mut backend = StubBackend::returning(AlertOutcome::Dismissed);
        let (confirmed, on_confirm) = counter();
        let (cancelled, on_cancel) = counter();

        warning(
            &mut backend,
            "Sure?",
            "Cannot be undone",
            Some(on_confirm),
            Some(on_cancel),
        );

        assert_eq!(backend.view().confirm_label.as_deref(), Some("Sí, continuar"));
        assert_eq!(backend.view().cancel_label.as_deref(), Some(DEFAULT_CANCEL));
        assert_eq!(cancelled.get(), 1);
        assert_eq!(confirmed.get(), 0);
    }

    #[test]
    fn test_deny_outcome_invokes_only_on_deny() {
        let _guard = marker::test_guard();
        let mut backend = StubBackend::returning(AlertOutcome::Denied);
        let (confirmed, on_confirm) = counter();
        let (denied, on_deny) = counter();

        let mut request =
            AlertRequest::new(AlertKind::Question, "Keep?", "Your call").with_deny("No");
        request.on_confirm = Some(on_confirm);
        request.on_deny = Some(on_deny);
        present(&mut backend, request);

        assert_eq!(denied.get(), 1);
        assert_eq!(confirmed.get(), 0);
    }

    #[test]
    fn test_toast_suppresses_confirm_and_defaults_timer_and_corner() {
        let _guard = marker::test_guard();
        let mut backend = StubBackend::returning(AlertOutcome::Dismissed);
        present(
            &mut backend,
            AlertRequest::new(AlertKind::Info, "Ping", "msg").as_toast(),
        );

        let view = backend.view();
        assert!(view.toast);
        assert_eq!(view.confirm_label, None);
        assert_eq!(view.timer, Some(TOAST_TIMER));
        assert_eq!(view.position, ToastPosition::TopEnd);
    }

    #[test]
    fn test_timed_alert_suppresses_confirm_but_keeps_center() {
        let _guard = marker::test_guard();
        let mut backend = StubBackend::returning(AlertOutcome::Dismissed);
        present(
            &mut backend,
            AlertRequest::new(AlertKind::Success, "Auto", "closes")
                .with_timer(Duration::from_millis(1500)),
        );

        let view = backend.view();
        assert_eq!(view.confirm_label, None);
        assert_eq!(view.timer, Some(Duration::from_millis(1500)));
        assert_eq!(view.position, ToastPosition::Center);
    }

    #[test]
    fn test_explicit_labels_override_defaults() {
        let _guard = marker::test_guard();
        let mut backend = StubBackend::returning(AlertOutcome::Dismissed);
        present(
            &mut backend,
            AlertRequest::new(AlertKind::Question, "Q", "?")
                .confirm_label("Go")
                .with_cancel("Stay")
                .with_deny("Never"),
        );

        let view = backend.view();
        assert_eq!(view.confirm_label.as_deref(), Some("Go"));
        assert_eq!(view.cancel_label.as_deref(), Some("Stay"));
        assert_eq!(view.deny_label.as_deref(), Some("Never"));
    }

    #[test]
    fn test_validator_travels_with_the_view() {
        let _guard = marker::test_guard();
        let mut backend = StubBackend::returning(AlertOutcome::Confirmed { input: None });
        present(
            &mut backend,
            AlertRequest::new(AlertKind::Question, "Name?", "Please").with_input(
                AlertInput::new(AlertInputKind::Text)
                    .with_validator(|v| v.is_empty().then(|| "Escribe algo".to_string())),
            ),
        );

        let input = backend.view().input.as_ref().unwrap();
        let validator = input.validator.as_ref().unwrap();
        assert_eq!(validator(""), Some("Escribe algo".to_string()));
        assert_eq!(validator("ok"), None);
    }
}
