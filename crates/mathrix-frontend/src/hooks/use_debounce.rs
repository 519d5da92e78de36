use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Handle returned by [`use_debounce`].
#[derive(Clone)]
pub struct Debounced<T: 'static> {
    pending: Rc<RefCell<Option<Timeout>>>,
    latest: Rc<RefCell<Callback<T>>>,
    delay_ms: u32,
}

impl<T: 'static> Debounced<T> {
    /// Re-arms the timer with `value`, replacing whatever was pending.
    pub fn emit(&self, value: T) {
        let latest = self.latest.clone();
        let timeout = Timeout::new(self.delay_ms, move || latest.borrow().emit(value));
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Drops the pending timer, if any, so it never fires.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Wraps `callback` so it only fires once `delay_ms` has passed without another call.
///
/// Dropping a [`Timeout`] cancels it, so only the most recent value is ever emitted.
#[hook]
pub fn use_debounce<T: 'static>(delay_ms: u32, callback: Callback<T>) -> Debounced<T> {
    let pending = use_mut_ref(|| None::<Timeout>);
    let latest = use_mut_ref(|| callback.clone());
    *latest.borrow_mut() = callback;

    Debounced {
        pending,
        latest,
        delay_ms,
    }
}
