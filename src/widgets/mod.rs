//! Presentational widgets.
//!
//! Every widget follows the same shape: a props struct built with
//! `with_*` methods, an optional small state struct when the widget needs
//! a cursor or selection, and a `render` function that paints from props,
//! state, and a [`Palette`](crate::theme::Palette). Widgets hold no
//! timers and no global state.

pub mod button;
pub mod form;
pub mod input;
pub mod loading;
pub mod select;
pub mod table;
pub mod textarea;

pub use button::{Button, ButtonVariant};
pub use form::{Form, FormVariant};
pub use input::{InputVariant, TextInput, TextInputState};
pub use loading::{Loading, LoadingColor, LoadingSize, LoadingVariant};
pub use select::{Select, SelectOption, SelectSize, SelectState};
pub use table::{Table, TableVariant};
pub use textarea::{TextArea, TextAreaSize, TextAreaState, TextAreaVariant};
