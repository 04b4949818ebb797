//! Process-wide dark-mode marker.
//!
//! One boolean flag shared by everything that wants the current mode
//! without holding a store reference; the alert helpers snapshot it at
//! presentation time. Applying a mode twice has the same effect as once.

use std::sync::atomic::{AtomicBool, Ordering};

use super::ThemeMode;

static DARK: AtomicBool = AtomicBool::new(false);

/// Set the marker to match `mode`. Idempotent.
pub fn apply(mode: ThemeMode) {
    DARK.store(mode.is_dark(), Ordering::Relaxed);
}

pub fn is_dark() -> bool {
    DARK.load(Ordering::Relaxed)
}

/// The mode currently recorded by the marker.
pub fn current() -> ThemeMode {
    if is_dark() {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Serializes tests that mutate the process-wide flag.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_idempotent() {
        let _guard = test_guard();
        apply(ThemeMode::Dark);
        apply(ThemeMode::Dark);
        assert!(is_dark());
        assert_eq!(current(), ThemeMode::Dark);
        apply(ThemeMode::Light);
        apply(ThemeMode::Light);
        assert!(!is_dark());
        assert_eq!(current(), ThemeMode::Light);
    }
}
