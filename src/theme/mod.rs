//! Light/dark theming.
//!
//! The [`ThemeStore`] holds the active [`ThemeMode`], persists it across
//! runs, and notifies subscribers whenever it changes. Widgets never read
//! the store directly; they take a [`Palette`] resolved from the current
//! mode so rendering stays a pure function of its inputs.

pub mod marker;
pub mod palette;
pub mod persist;
pub mod store;
pub mod toggle;

pub use palette::Palette;
pub use store::{SubscriberId, ThemeStore};

use std::fmt;
use std::str::FromStr;

/// The two-valued display preference. Defaults to light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(()),
        }
    }
}
