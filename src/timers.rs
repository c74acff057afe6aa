//! Timer Handles
//!
//! Replaceable gloo timers owned by the reactive graph. Scheduling a new
//! callback drops the pending one, which cancels it.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

/// Free-text filter inputs wait this long after the last keystroke
pub const DEBOUNCE_MS: u32 = 300;

/// Holds at most one pending timer handle.
///
/// gloo handles cancel on drop, so replacing or clearing the slot cancels
/// whatever was pending.
#[derive(Debug)]
pub struct TimerSlot<H> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> TimerSlot<H> {
    /// Install `handle`, dropping the previous one
    pub fn schedule(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Single pending callback, restarted on every `call`
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    slot: StoredValue<TimerSlot<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, slot: StoredValue::new_local(TimerSlot::default()) }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        self.slot.update_value(|slot| slot.schedule(timeout));
    }

    pub fn cancel(&self) {
        self.slot.update_value(TimerSlot::cancel);
    }
}

/// Wall-clock "now" in the browser's local zone, for relative dates
pub fn local_now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts drops, standing in for a timer that cancels on drop
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_new_keystroke_cancels_pending_call() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();

        slot.schedule(Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 0);

        slot.schedule(Handle(cancelled.clone()));
        assert_eq!(cancelled.get(), 1);
        assert!(slot.is_pending());
    }

    #[test]
    fn test_cancel_drops_pending_handle() {
        let cancelled = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::default();
        slot.schedule(Handle(cancelled.clone()));

        slot.cancel();
        assert_eq!(cancelled.get(), 1);
        assert!(!slot.is_pending());

        slot.cancel();
        assert_eq!(cancelled.get(), 1);
    }
}
