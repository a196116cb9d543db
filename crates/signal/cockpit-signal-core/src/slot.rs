use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type SlotFn<T> = Box<dyn FnMut(&T)>;

/// Receiver end of a [`Signal`](crate::Signal).
pub struct Slot<T> {
    value: T,
    dirty: bool,
    callback: SlotFn<T>,
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("value", &self.value)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq> Slot<T> {
    /// A dirty slot holding `initial`; its first notification always fires.
    pub fn new<F>(initial: T, callback: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        Self {
            value: initial,
            dirty: true,
            callback: Box::new(callback),
        }
    }

    /// Store `v` and run the callback if the slot is dirty or `v` differs from
    /// the stored value. Returns whether the callback ran.
    pub fn notify(&mut self, v: &T) -> bool {
        if !self.dirty && *v == self.value {
            return false;
        }
        self.value = v.clone();
        self.dirty = false;
        (self.callback)(v);
        true
    }

    /// Force the next [`notify`](Self::notify) to fire even if the value is
    /// unchanged.
    pub fn set(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Shared handle to a [`Slot`]. Cloning shares the same slot.
///
/// The callback runs while the slot is borrowed, so it must not read its own
/// handle; capture whatever state it needs instead.
pub struct SlotHandle<T>(Rc<RefCell<Slot<T>>>);

impl<T> Clone for SlotHandle<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(slot) => slot.fmt(f),
            Err(_) => f.write_str("SlotHandle(<notifying>)"),
        }
    }
}

impl<T: Clone + PartialEq> SlotHandle<T> {
    pub fn new<F>(initial: T, callback: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        Self(Rc::new(RefCell::new(Slot::new(initial, callback))))
    }

    pub fn notify(&self, v: &T) -> bool {
        self.0.borrow_mut().notify(v)
    }

    pub fn set(&self) {
        self.0.borrow_mut().set();
    }

    pub fn value(&self) -> T {
        self.0.borrow().value().clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.0.borrow().is_dirty()
    }

    /// Whether two handles point at the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn cell(&self) -> &RefCell<Slot<T>> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fresh_slot_fires_once_then_dedups() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut slot = Slot::new(0, move |_| h.set(h.get() + 1));
        assert!(slot.is_dirty());
        assert!(slot.notify(&0));
        assert!(!slot.notify(&0));
        assert!(slot.notify(&1));
        assert_eq!(hits.get(), 2);
        assert_eq!(*slot.value(), 1);
    }

    #[test]
    fn set_forces_redundant_notification() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let handle = SlotHandle::new(false, move |_| h.set(h.get() + 1));
        handle.notify(&true);
        handle.set();
        assert!(handle.is_dirty());
        assert!(handle.notify(&true));
        assert!(!handle.notify(&true));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn clones_share_one_slot() {
        let a = SlotHandle::new(1.0_f64, |_| {});
        let b = a.clone();
        b.notify(&2.5);
        assert_eq!(a.value(), 2.5);
        assert!(a.ptr_eq(&b));
    }
}
