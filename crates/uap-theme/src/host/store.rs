//! Persistent key-value storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreError;

/// Durable string storage scoped to the page's origin.
///
/// Implemented over `localStorage` in the browser and by [`MemoryStore`]
/// everywhere else.
pub trait PersistentStore {
    /// Returns the value under `key`. Read failures count as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

/// In-memory [`PersistentStore`].
///
/// Clones share the same entries, the way every page load of an origin
/// shares one `localStorage`. Hand a clone to a controller and keep one
/// to inspect or to seed a later "reload".
///
/// # Example
///
/// ```rust
/// use uap_theme::{MemoryStore, PersistentStore};
///
/// let store = MemoryStore::new().with_entry("uap-theme", "rose");
/// let mut handle = store.clone();
/// handle.set("uap-theme", "dark").unwrap();
/// assert_eq!(store.entry("uap-theme").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryStoreInner>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry, returning the store for chaining.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Returns the value under `key`.
    pub fn entry(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Makes every subsequent write fail with [`StoreError::Rejected`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entry(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(StoreError::Rejected {
                key: key.to_string(),
                message: "writes disabled".to_string(),
            });
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
