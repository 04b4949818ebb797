//! The theme store: current mode, persistence, and change subscriptions.

use std::path::PathBuf;
use tracing::{debug, warn};

use super::{marker, persist, Palette, ThemeMode};

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(ThemeMode)>;

/// Holds the active [`ThemeMode`] and fans out changes.
///
/// Mutations go through [`set_mode`](Self::set_mode) or
/// [`toggle`](Self::toggle); each one persists the new value, applies the
/// global marker, and then notifies subscribers synchronously in
/// registration order. Persistence happens before notification so a
/// subscriber that re-reads storage sees the value it was notified with.
pub struct ThemeStore {
    mode: ThemeMode,
    storage: PathBuf,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_id: u64,
}

impl ThemeStore {
    /// Load from the default storage path, falling back to light mode
    /// when nothing valid was persisted.
    pub fn load() -> Self {
        Self::load_from(persist::default_path())
    }

    /// Load from an explicit storage path.
    pub fn load_from(storage: PathBuf) -> Self {
        let mode = match persist::load(&storage) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                warn!("could not read persisted theme: {e}");
                ThemeMode::default()
            }
        };
        marker::apply(mode);
        Self {
            mode,
            storage,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Palette for the current mode.
    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode)
    }

    /// Switch to `mode`. No-op when `mode` is already active; otherwise
    /// persists, applies the marker, and notifies every subscriber.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        debug!("theme mode changed to {mode}");

        // Persist before notifying: a subscriber that reads storage in
        // its callback must see the new value. Failures are best-effort.
        if let Err(e) = persist::save(&self.storage, mode) {
            warn!("could not persist theme mode: {e}");
        }
        marker::apply(mode);

        for (_, subscriber) in &mut self.subscribers {
            subscriber(mode);
        }
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        self.set_mode(self.mode.flipped());
    }

    /// Register a callback invoked with the new mode on every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(ThemeMode) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscription; unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("storage", &self.storage)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_in(dir: &tempfile::TempDir) -> ThemeStore {
        ThemeStore::load_from(dir.path().join("theme.toml"))
    }

    #[test]
    fn test_defaults_to_light() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.palette(), Palette::light());
    }

    #[test]
    fn test_set_then_get() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for mode in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark] {
            store.set_mode(mode);
            assert_eq!(store.mode(), mode);
        }
    }

    #[test]
    fn test_toggle_parity() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        for n in 1..=6 {
            store.toggle();
            let expected = if n % 2 == 0 {
                ThemeMode::Light
            } else {
                ThemeMode::Dark
            };
            assert_eq!(store.mode(), expected, "after {n} toggles");
        }
    }

    #[test]
    fn test_persisted_mode_survives_reload() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        store_in(&dir).set_mode(ThemeMode::Dark);

        let reloaded = store_in(&dir);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_unwritable_storage_still_updates_and_notifies() {
        let _guard = marker::test_guard();
        // A directory at the storage path makes the write fail.
        let dir = tempfile::tempdir().unwrap();
        let mut store = ThemeStore::load_from(dir.path().to_path_buf());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |mode| sink.borrow_mut().push(mode));

        store.set_mode(ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark]);
    }

    #[test]
    fn test_subscribers_notified_in_registration_order() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let sink = order.clone();
            store.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        store.toggle();
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_set_to_current_mode_does_not_notify() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.set_mode(ThemeMode::Light);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.toggle();
        store.unsubscribe(id);
        store.toggle();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_marker_follows_store() {
        let _guard = marker::test_guard();
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_mode(ThemeMode::Dark);
        assert!(marker::is_dark());
        store.set_mode(ThemeMode::Light);
        assert!(!marker::is_dark());
    }
}
