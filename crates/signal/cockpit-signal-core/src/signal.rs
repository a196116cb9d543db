use std::fmt;

use log::warn;

use crate::slot::SlotHandle;

/// Broadcast point owned by the component whose state changes.
pub struct Signal<T> {
    value: T,
    subscribers: Vec<SlotHandle<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T: Default + Clone + PartialEq> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq> Signal<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            subscribers: Vec::new(),
        }
    }

    /// Subscribe `slot`. Subscriptions are never revoked; attaching the same
    /// slot twice notifies it twice per fire.
    pub fn attach(&mut self, slot: &SlotHandle<T>) {
        self.subscribers.push(slot.clone());
    }

    /// Store `v` and notify every subscriber in attachment order.
    pub fn fire(&mut self, v: T) {
        self.value = v;
        for slot in &self.subscribers {
            match slot.cell().try_borrow_mut() {
                Ok(mut s) => {
                    s.notify(&self.value);
                }
                Err(_) => {
                    debug_assert!(false, "re-entrant signal fire: slot is already being notified");
                    warn!("re-entrant signal fire: skipping slot that is already being notified");
                }
            }
        }
    }

    /// Store `v` without notifying anyone. Pair with a later
    /// [`fire`](Self::fire) to propagate.
    pub fn update(&mut self, v: T) {
        self.value = v;
    }

    /// Re-fire the stored value.
    pub fn refire(&mut self) {
        let v = self.value.clone();
        self.fire(v);
    }

    #[inline]
    pub fn current(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
