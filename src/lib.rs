//! crabkit: a themeable terminal UI component toolkit built on ratatui.
//!
//! Three pieces cooperate:
//!
//! - [`theme`]: the light/dark [`ThemeStore`](theme::ThemeStore) with
//!   persistence and change subscriptions, plus the [`Palette`] every
//!   widget renders from.
//! - [`modal`]: a dialog's open/close lifecycle with a timed closing
//!   transition and an exactly-once close callback.
//! - [`widgets`] and [`alert`]: stateless presentation: buttons,
//!   inputs, selects, tables, text areas, forms, loading indicators, and
//!   dialog/toast helpers.
//!
//! The `showcase` binary demonstrates every component in a live
//! terminal.

pub mod alert;
pub mod modal;
pub mod theme;
pub mod widgets;

pub use alert::{AlertBackend, AlertKind, AlertOutcome, AlertRequest, Toast, ToastPosition};
pub use modal::{Modal, ModalController, ModalHandle, ModalPhase};
pub use theme::{Palette, ThemeMode, ThemeStore};
