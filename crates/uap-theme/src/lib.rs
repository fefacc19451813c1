//! # uap-theme - Persistent page theme switching
//!
//! `uap-theme` keeps a page's visual theme across visits. The active theme is
//! shown as a single `theme-<name>` class on the page root, persisted under
//! one key in origin-scoped storage, restored when the page loads, and kept
//! in sync with an optional `<select id="themeSelect">` control.
//!
//! ## Themes
//!
//! The allowed themes are fixed: `default`, `rose`, `tulip`, `beach`,
//! `golden` and `dark`. Stylesheet authors provide rules for each
//! `theme-<name>` class. Any other requested or stored name silently becomes
//! `default`.
//!
//! ## Quick Start
//!
//! ```rust
//! use uap_theme::{MemorySelector, MemoryStore, MemoryTarget, ThemeController, ThemeName};
//!
//! // A returning visitor who picked "rose" last time.
//! let store = MemoryStore::new().with_entry("uap-theme", "rose");
//! let selector = MemorySelector::new();
//!
//! let controller = ThemeController::new(store.clone(), MemoryTarget::with_classes(["page"]))
//!     .with_selector(selector.clone())
//!     .into_shared();
//! ThemeController::init_theme(&controller);
//!
//! assert_eq!(controller.borrow().current(), ThemeName::Rose);
//! assert_eq!(controller.borrow().target().classes(), ["page", "theme-rose"]);
//!
//! // The visitor picks another option.
//! selector.dispatch_change("beach");
//! assert_eq!(controller.borrow().target().theme_markers(), ["theme-beach"]);
//! assert_eq!(store.entry("uap-theme").as_deref(), Some("beach"));
//! ```
//!
//! ## In the browser
//!
//! Built for `wasm32`, the crate wires the controller to `localStorage`,
//! `document.body` and `#themeSelect`, and by default initialises itself once
//! the document is parsed. The module exports `initTheme`, `initThemeWith`,
//! `applyTheme`, `currentTheme` and `themes` to JavaScript:
//!
//! ```javascript
//! import init, { applyTheme } from './uap_theme.js';
//!
//! await init();
//! applyTheme('dark');
//! ```
//!
//! ## Host capabilities
//!
//! The controller only touches the page through three traits:
//! [`PersistentStore`], [`ThemeTarget`] and [`SelectorControl`]. The
//! in-memory implementations make the whole behaviour testable natively.
//!
//! ## Logging
//!
//! Events are emitted with [`tracing`]; install a subscriber to see them.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ControllerConfig, ThemeRoot, SELECTOR_ID, STORAGE_KEY};
pub use controller::{InitialSource, SharedController, ThemeController};
pub use error::{StoreError, UnknownThemeError};
pub use host::{
    structure_ready, ChangeListener, MemorySelector, MemoryStore, MemoryTarget, PersistentStore,
    SelectorControl, ThemeTarget,
};
pub use theme::{system_color_mode, ColorMode, ColorModeDetector, ThemeName, THEME_MARKER_PREFIX};
