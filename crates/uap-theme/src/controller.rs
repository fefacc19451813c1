//! The theme controller: one active theme plus the page capabilities it drives.
//!
//! A [`ThemeController`] owns the persistent store, the marker target and
//! (optionally) the selector control for one page session. Its only state is
//! the active [`ThemeName`], changed exclusively by
//! [`ThemeController::apply_theme`].
//!
//! # Lifecycle
//!
//! 1. Build the controller over its capabilities.
//! 2. Share it ([`ThemeController::into_shared`]) and call
//!    [`ThemeController::init_theme`] once the document is ready. This
//!    restores the persisted theme and subscribes to the selector.
//! 3. From then on the theme changes when the user picks an option or when
//!    code calls `apply_theme`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::host::{PersistentStore, SelectorControl, ThemeTarget};
use crate::theme::{system_color_mode, ColorModeDetector, ThemeName};

/// A controller shared between its owner and the selector's change listener.
pub type SharedController<S, T> = Rc<RefCell<ThemeController<S, T>>>;

/// Where the theme applied at startup came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSource {
    /// A persisted preference (possibly invalid, then normalized).
    Stored,
    /// The system color mode, on a first visit with
    /// [`ControllerConfig::follow_system_preference`] set.
    System,
    /// Nothing stored: the default theme.
    Fallback,
}

/// Applies, persists and restores the page theme.
///
/// # Example
///
/// ```rust
/// use uap_theme::{MemoryStore, MemoryTarget, ThemeController, ThemeName};
///
/// let store = MemoryStore::new();
/// let mut controller = ThemeController::new(store.clone(), MemoryTarget::new());
///
/// assert_eq!(controller.apply_theme("beach"), ThemeName::Beach);
/// assert_eq!(controller.target().theme_markers(), ["theme-beach"]);
/// assert_eq!(store.entry("uap-theme").as_deref(), Some("beach"));
///
/// // Unknown names fall back to the default theme.
/// assert_eq!(controller.apply_theme("neon"), ThemeName::Default);
/// ```
pub struct ThemeController<S, T> {
    store: S,
    target: T,
    selector: Option<Box<dyn SelectorControl>>,
    config: ControllerConfig,
    detector: ColorModeDetector,
    current: ThemeName,
    listening: bool,
}

impl<S: PersistentStore, T: ThemeTarget> ThemeController<S, T> {
    /// Creates a controller with the default configuration and no selector.
    ///
    /// Nothing is applied until [`apply_theme`](Self::apply_theme) or
    /// [`init_theme`](Self::init_theme) runs.
    pub fn new(store: S, target: T) -> Self {
        Self {
            store,
            target,
            selector: None,
            config: ControllerConfig::default(),
            detector: system_color_mode,
            current: ThemeName::default(),
            listening: false,
        }
    }

    /// Attaches the selector control to keep in sync.
    pub fn with_selector(mut self, selector: impl SelectorControl + 'static) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides how the system color mode is detected.
    pub fn with_color_mode_detector(mut self, detector: ColorModeDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Wraps the controller for [`init_theme`](Self::init_theme).
    pub fn into_shared(self) -> SharedController<S, T> {
        Rc::new(RefCell::new(self))
    }

    /// The active theme.
    pub fn current(&self) -> ThemeName {
        self.current
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn selector(&self) -> Option<&dyn SelectorControl> {
        self.selector.as_deref()
    }

    /// The raw persisted preference, before any normalization.
    pub fn stored_preference(&self) -> Option<String> {
        self.store.get(&self.config.storage_key)
    }

    /// Makes `requested` the active theme.
    ///
    /// Names outside the allow-list resolve to the default theme. The
    /// resolved theme's marker replaces every other theme marker on the
    /// target, is persisted, and is mirrored into the selector if there is
    /// one. A failed storage write is logged and otherwise ignored: the page
    /// still switches theme.
    pub fn apply_theme(&mut self, requested: &str) -> ThemeName {
        let theme = ThemeName::resolve(requested);

        self.target.set_marker(theme);

        if let Err(err) = self.store.set(&self.config.storage_key, theme.as_str()) {
            warn!(
                key = %self.config.storage_key,
                theme = %theme,
                error = %err,
                "could not persist theme"
            );
        }

        if let Some(selector) = &self.selector {
            selector.set_value(theme.as_str());
        }

        self.current = theme;
        debug!(requested, theme = %theme, "theme applied");
        theme
    }

    /// Releases the page so another controller can take over.
    ///
    /// Removes every theme marker from the target and unsubscribes from the
    /// selector. The persisted preference is kept.
    pub fn detach(&mut self) {
        self.target.clear_markers();
        if let Some(selector) = &self.selector {
            selector.remove_listeners();
        }
        self.listening = false;
        debug!(theme = %self.current, "theme controller detached");
    }

    /// Picks the name `init_theme` applies.
    fn initial_request(&self) -> (String, InitialSource) {
        if let Some(stored) = self.stored_preference() {
            return (stored, InitialSource::Stored);
        }
        if self.config.follow_system_preference {
            let theme = (self.detector)().preferred_theme();
            return (theme.as_str().to_string(), InitialSource::System);
        }
        (
            ThemeName::default().as_str().to_string(),
            InitialSource::Fallback,
        )
    }
}

impl<S, T> ThemeController<S, T>
where
    S: PersistentStore + 'static,
    T: ThemeTarget + 'static,
{
    /// Restores the persisted theme and starts following the selector.
    ///
    /// Call once the document structure is available. The stored value (or
    /// the default when nothing is stored) goes through
    /// [`apply_theme`](Self::apply_theme), which also rewrites a corrupted
    /// stored value. If a selector is attached, every user-driven change of
    /// it is applied from then on; calling this again re-applies the stored
    /// theme without subscribing twice.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uap_theme::{MemorySelector, MemoryStore, MemoryTarget, SelectorControl};
    /// use uap_theme::{ThemeController, ThemeName};
    ///
    /// let store = MemoryStore::new().with_entry("uap-theme", "dark");
    /// let selector = MemorySelector::new();
    /// let controller = ThemeController::new(store.clone(), MemoryTarget::new())
    ///     .with_selector(selector.clone())
    ///     .into_shared();
    ///
    /// assert_eq!(ThemeController::init_theme(&controller), ThemeName::Dark);
    /// assert_eq!(selector.value(), "dark");
    ///
    /// selector.dispatch_change("golden");
    /// assert_eq!(controller.borrow().current(), ThemeName::Golden);
    /// assert_eq!(store.entry("uap-theme").as_deref(), Some("golden"));
    /// ```
    pub fn init_theme(controller: &SharedController<S, T>) -> ThemeName {
        let mut this = controller.borrow_mut();

        let (requested, source) = this.initial_request();
        let theme = this.apply_theme(&requested);
        info!(requested = %requested, theme = %theme, source = ?source, "theme restored");

        if this.listening {
            return theme;
        }

        let subscribed = match this.selector.as_deref() {
            Some(selector) => {
                let weak = Rc::downgrade(controller);
                selector.on_change(Box::new(move |value: String| {
                    let Some(controller) = weak.upgrade() else {
                        return;
                    };
                    let Ok(mut active) = controller.try_borrow_mut() else {
                        warn!(value = %value, "theme controller busy, selection ignored");
                        return;
                    };
                    active.apply_theme(&value);
                }));
                true
            }
            None => {
                debug!(selector_id = %this.config.selector_id, "no theme selector");
                false
            }
        };
        this.listening = subscribed;

        theme
    }
}

impl<S: fmt::Debug, T: fmt::Debug> fmt::Debug for ThemeController<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("store", &self.store)
            .field("target", &self.target)
            .field("has_selector", &self.selector.is_some())
            .field("config", &self.config)
            .field("current", &self.current)
            .field("listening", &self.listening)
            .finish()
    }
}
