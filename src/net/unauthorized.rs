//! Hook invoked when any backend call answers 401.
//!
//! The resource clients never navigate or touch session state themselves;
//! they call [`notify`], and whoever owns the session (the root `App`)
//! installs the handler that clears it and lands on the login page. Keeps
//! the forced-logout control flow visible at the top level instead of
//! buried in a request helper.

#[cfg(test)]
#[path = "unauthorized_test.rs"]
mod unauthorized_test;

use std::cell::RefCell;

thread_local! {
    static HANDLER: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Install the handler invoked on every unauthorized response. Replaces any
/// previously installed handler.
pub fn set_handler(handler: impl Fn() + 'static) {
    HANDLER.with(|slot| *slot.borrow_mut() = Some(Box::new(handler)));
}

/// Remove the installed handler, if any.
pub fn clear_handler() {
    HANDLER.with(|slot| *slot.borrow_mut() = None);
}

/// Invoke the installed handler. A no-op when none is installed.
pub fn notify() {
    HANDLER.with(|slot| {
        if let Some(handler) = slot.borrow().as_ref() {
            handler();
        }
    });
}
