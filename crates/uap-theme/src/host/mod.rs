//! Capabilities the controller needs from its host page.
//!
//! This module provides:
//!
//! - [`PersistentStore`]: Durable key-value storage
//! - [`ThemeTarget`]: The element carrying the theme marker class
//! - [`SelectorControl`]: The optional control showing the active theme
//! - [`structure_ready`]: When a document can be initialised
//!
//! Each comes with an in-memory implementation ([`MemoryStore`],
//! [`MemoryTarget`], [`MemorySelector`]) for tests and non-browser hosts.
//! The browser implementations live in the wasm32-only `web` module.

mod ready;
mod selector;
mod store;
mod target;

pub use ready::structure_ready;
pub use selector::{ChangeListener, MemorySelector, SelectorControl};
pub use store::{MemoryStore, PersistentStore};
pub use target::{MemoryTarget, ThemeTarget};
