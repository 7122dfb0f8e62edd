use std::cell::RefCell;
use std::rc::Rc;

/// Shared single-threaded state that async tasks mutate between suspension points.
///
/// Closures must not await; no borrow outlives a call.
pub trait StateCell<T>: Clone {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
