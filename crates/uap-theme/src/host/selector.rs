//! The optional theme selector control.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback run with the control's new value after a user-driven change.
pub type ChangeListener = Box<dyn FnMut(String)>;

/// A control (normally a `<select>`) whose value names the active theme.
///
/// Methods take `&self`: like DOM elements, controls are shared handles
/// and listeners may update the control that is notifying them.
pub trait SelectorControl {
    fn value(&self) -> String;

    /// Sets the value without notifying listeners.
    fn set_value(&self, value: &str);

    /// Registers `listener` for user-driven value changes.
    fn on_change(&self, listener: ChangeListener);

    /// Drops every listener registered through this handle.
    fn remove_listeners(&self);
}

#[derive(Default)]
struct MemorySelectorInner {
    value: RefCell<String>,
    listeners: RefCell<Vec<ChangeListener>>,
}

/// In-memory [`SelectorControl`].
///
/// Clones share the value and listeners. [`MemorySelector::dispatch_change`]
/// plays the part of the user picking an option.
#[derive(Clone, Default)]
pub struct MemorySelector {
    inner: Rc<MemorySelectorInner>,
}

impl MemorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value and fires every listener, as a user selection does.
    pub fn dispatch_change(&self, value: &str) {
        self.set_value(value);
        let mut listeners = self.inner.listeners.borrow_mut();
        for listener in listeners.iter_mut() {
            listener(value.to_string());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl fmt::Debug for MemorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySelector")
            .field("value", &*self.inner.value.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl SelectorControl for MemorySelector {
    fn value(&self) -> String {
        self.inner.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.inner.value.borrow_mut() = value.to_string();
    }

    fn on_change(&self, listener: ChangeListener) {
        self.inner.listeners.borrow_mut().push(listener);
    }

    fn remove_listeners(&self) {
        self.inner.listeners.borrow_mut().clear();
    }
}
