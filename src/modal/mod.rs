//! Modal lifecycle.
//!
//! A [`ModalController`] owns one dialog's open/close state machine:
//!
//! ```text
//! Opening -> Open -> Closing -> Closed
//! ```
//!
//! Construction implies intent to open; the controller starts in
//! `Opening` and advances to `Open` on the next tick so one entry frame
//! can render. `request_close` arms a single deadline; once it passes,
//! the close callback fires exactly once. Dropping the controller before
//! the deadline cancels the callback outright.
//!
//! Phases never re-enter. A dialog that should reopen gets a fresh
//! controller.

mod view;

pub use view::{render, Modal};

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default closing transition length.
pub const DEFAULT_CLOSE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Opening,
    Open,
    Closing,
    Closed,
}

struct Inner {
    phase: ModalPhase,
    close_duration: Duration,
    close_deadline: Option<Instant>,
    on_close: Option<Box<dyn FnOnce()>>,
    layer: u16,
}

impl Inner {
    /// Arm the closing transition. Idempotent: once `Closing` or
    /// `Closed`, later calls neither re-arm the deadline nor re-trigger
    /// the callback.
    fn request_close(&mut self, now: Instant) {
        match self.phase {
            ModalPhase::Opening | ModalPhase::Open => {
                self.phase = ModalPhase::Closing;
                self.close_deadline = Some(now + self.close_duration);
                debug!("modal closing, deadline in {:?}", self.close_duration);
            }
            ModalPhase::Closing | ModalPhase::Closed => {}
        }
    }

    /// Advance time-driven transitions; returns the callback when the
    /// close deadline has passed.
    fn tick(&mut self, now: Instant) -> Option<Box<dyn FnOnce()>> {
        match self.phase {
            ModalPhase::Opening => {
                // One frame has rendered the entry transition by now.
                self.phase = ModalPhase::Open;
                None
            }
            ModalPhase::Closing if self.close_deadline.is_some_and(|d| now >= d) => {
                self.phase = ModalPhase::Closed;
                self.on_close.take()
            }
            _ => None,
        }
    }
}

/// Owns one dialog's lifecycle. See the module docs for the phase
/// contract.
pub struct ModalController {
    inner: Rc<RefCell<Inner>>,
}

impl ModalController {
    pub fn new(on_close: impl FnOnce() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                phase: ModalPhase::Opening,
                close_duration: DEFAULT_CLOSE_DURATION,
                close_deadline: None,
                on_close: Some(Box::new(on_close)),
                layer: 0,
            })),
        }
    }

    pub fn with_close_duration(self, duration: Duration) -> Self {
        self.inner.borrow_mut().close_duration = duration;
        self
    }

    /// Paint-order hint for hosts drawing several overlays. Not used for
    /// any coordination between controllers.
    pub fn with_layer(self, layer: u16) -> Self {
        self.inner.borrow_mut().layer = layer;
        self
    }

    pub fn phase(&self) -> ModalPhase {
        self.inner.borrow().phase
    }

    pub fn layer(&self) -> u16 {
        self.inner.borrow().layer
    }

    /// True once the controller has reached `Closed` and fired its
    /// callback; the host can drop it.
    pub fn is_closed(&self) -> bool {
        self.phase() == ModalPhase::Closed
    }

    /// Begin closing. Safe to call from the close affordance, a footer
    /// action, or a handle; repeat calls are no-ops.
    pub fn request_close(&mut self, now: Instant) {
        self.inner.borrow_mut().request_close(now);
    }

    /// Drive the state machine. Call once per host tick with the current
    /// time; fires the close callback when the closing duration has
    /// elapsed.
    pub fn tick(&mut self, now: Instant) {
        // The callback runs after the borrow is released so it may touch
        // a handle without re-entering the RefCell.
        let callback = self.inner.borrow_mut().tick(now);
        if let Some(callback) = callback {
            callback();
        }
    }

    /// An external close handle routing through the same state machine.
    pub fn handle(&self) -> ModalHandle {
        ModalHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl std::fmt::Debug for ModalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("phase", &self.phase())
            .field("layer", &self.layer())
            .finish()
    }
}

/// Weak reference to a [`ModalController`] for close-from-outside. All
/// calls route through the controller's own `request_close`, so the
/// once-only callback guarantee holds no matter which path asked for the
/// close; a handle to a dropped controller does nothing.
#[derive(Clone)]
pub struct ModalHandle {
    inner: Weak<RefCell<Inner>>,
}

impl ModalHandle {
    pub fn request_close(&self, now: Instant) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().request_close(now);
        }
    }

    /// Current phase, or `None` when the controller is gone.
    pub fn phase(&self) -> Option<ModalPhase> {
        self.inner.upgrade().map(|inner| inner.borrow().phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const D: Duration = Duration::from_millis(300);

    fn counting_controller() -> (ModalController, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let sink = fired.clone();
        let controller = ModalController::new(move || sink.set(sink.get() + 1))
            .with_close_duration(D);
        (controller, fired)
    }

    #[test]
    fn test_opening_advances_to_open_on_tick() {
        let (mut controller, _) = counting_controller();
        assert_eq!(controller.phase(), ModalPhase::Opening);
        controller.tick(Instant::now());
        assert_eq!(controller.phase(), ModalPhase::Open);
    }

    #[test]
    fn test_callback_fires_only_after_full_duration() {
        let (mut controller, fired) = counting_controller();
        let t = Instant::now();
        controller.tick(t);
        controller.request_close(t);

        controller.tick(t + D - Duration::from_millis(1));
        assert_eq!(controller.phase(), ModalPhase::Closing);
        assert_eq!(fired.get(), 0);

        controller.tick(t + D);
        assert_eq!(controller.phase(), ModalPhase::Closed);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_double_request_close_fires_once_and_keeps_first_deadline() {
        let (mut controller, fired) = counting_controller();
        let t = Instant::now();
        controller.tick(t);
        controller.request_close(t);
        // A later second request must not push the deadline out.
        controller.request_close(t + Duration::from_millis(200));

        controller.tick(t + D);
        assert_eq!(fired.get(), 1);

        controller.tick(t + D + D);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_close_from_opening_collapses_to_closing() {
        let (mut controller, fired) = counting_controller();
        let t = Instant::now();
        controller.request_close(t);
        assert_eq!(controller.phase(), ModalPhase::Closing);
        controller.tick(t + D);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_drop_before_deadline_cancels_callback() {
        let (mut controller, fired) = counting_controller();
        let t = Instant::now();
        controller.tick(t);
        controller.request_close(t);
        drop(controller);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_handle_routes_through_same_state_machine() {
        let (mut controller, fired) = counting_controller();
        let handle = controller.handle();
        let t = Instant::now();
        controller.tick(t);

        handle.request_close(t);
        assert_eq!(controller.phase(), ModalPhase::Closing);

        // Handle and controller both asking changes nothing.
        controller.request_close(t + Duration::from_millis(100));
        handle.request_close(t + Duration::from_millis(150));

        controller.tick(t + D);
        assert_eq!(fired.get(), 1);
        assert_eq!(handle.phase(), Some(ModalPhase::Closed));
    }

    #[test]
    fn test_handle_outliving_controller_is_inert() {
        let (controller, _) = counting_controller();
        let handle = controller.handle();
        drop(controller);
        handle.request_close(Instant::now());
        assert_eq!(handle.phase(), None);
    }

    #[test]
    fn test_closed_is_terminal() {
        let (mut controller, fired) = counting_controller();
        let t = Instant::now();
        controller.tick(t);
        controller.request_close(t);
        controller.tick(t + D);

        controller.request_close(t + D);
        controller.tick(t + D + D);
        assert_eq!(controller.phase(), ModalPhase::Closed);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_callback_may_use_a_handle() {
        // The callback runs outside the controller borrow, so holding a
        // handle inside it must not panic.
        let slot: Rc<RefCell<Option<ModalHandle>>> = Rc::new(RefCell::new(None));
        let held = slot.clone();
        let mut modal = ModalController::new(move || {
            if let Some(handle) = held.borrow().as_ref() {
                let _ = handle.phase();
            }
        })
        .with_close_duration(D);
        *slot.borrow_mut() = Some(modal.handle());

        let t = Instant::now();
        modal.tick(t);
        modal.request_close(t);
        modal.tick(t + D);
        assert!(modal.is_closed());
    }
}
