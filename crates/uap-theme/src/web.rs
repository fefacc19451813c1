//! Browser bindings using wasm-bindgen.
//!
//! Implements the host capabilities over `localStorage`, the root element's
//! `classList` and the `#themeSelect` element, and exposes the
//! JavaScript-facing entry points.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement, Storage};

use crate::config::{ControllerConfig, ThemeRoot};
use crate::controller::{SharedController, ThemeController};
use crate::error::StoreError;
use crate::host::{ChangeListener, PersistentStore, SelectorControl, ThemeTarget};
use crate::theme::ThemeName;

// ──────────────────────────────────────────────────────────────────────────────
// Capabilities
// ──────────────────────────────────────────────────────────────────────────────

/// `window.localStorage`, or nothing when the page may not use it.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistentStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected {
                key: key.to_string(),
                message: format!("{:?}", err),
            })
    }
}

/// An element's `classList`.
#[derive(Debug, Clone)]
pub struct ClassListTarget {
    element: Element,
}

impl ClassListTarget {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ThemeTarget for ClassListTarget {
    fn add_marker(&mut self, marker: &str) {
        if let Err(err) = self.element.class_list().add_1(marker) {
            warn!(marker, error = ?err, "could not add theme marker");
        }
    }

    fn remove_marker(&mut self, marker: &str) {
        if let Err(err) = self.element.class_list().remove_1(marker) {
            warn!(marker, error = ?err, "could not remove theme marker");
        }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.element.class_list().contains(marker)
    }
}

type ChangeClosure = Closure<dyn FnMut(web_sys::Event)>;

/// A `<select>` element.
#[derive(Debug, Clone)]
pub struct SelectElement {
    element: HtmlSelectElement,
    listeners: Rc<RefCell<Vec<ChangeClosure>>>,
}

impl SelectElement {
    /// Finds the `<select>` with id `id`, if the page has one.
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlSelectElement>() {
            Ok(element) => Some(Self {
                element,
                listeners: Rc::default(),
            }),
            Err(_) => {
                warn!(id, "theme selector is not a <select> element");
                None
            }
        }
    }
}

impl SelectorControl for SelectElement {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&self, value: &str) {
        self.element.set_value(value);
    }

    fn on_change(&self, mut listener: ChangeListener) {
        let select = self.element.clone();
        let onchange = ChangeClosure::new(move |_event: web_sys::Event| {
            listener(select.value());
        });
        if let Err(err) = self
            .element
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())
        {
            warn!(error = ?err, "could not subscribe to theme selector");
            return;
        }
        self.listeners.borrow_mut().push(onchange);
    }

    fn remove_listeners(&self) {
        for onchange in self.listeners.borrow_mut().drain(..) {
            if let Err(err) = self
                .element
                .remove_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())
            {
                warn!(error = ?err, "could not unsubscribe from theme selector");
            }
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Session
// ──────────────────────────────────────────────────────────────────────────────

type BrowserController = SharedController<LocalStorage, ClassListTarget>;

thread_local! {
    static SESSION: RefCell<Option<BrowserController>> = const { RefCell::new(None) };
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

fn root_element(document: &Document, root: ThemeRoot) -> Option<Element> {
    match root {
        ThemeRoot::Body => document.body().map(Element::from),
        ThemeRoot::DocumentElement => document.document_element(),
    }
}

fn build_session(config: ControllerConfig) -> Result<BrowserController, JsValue> {
    let document = document()?;
    let root = root_element(&document, config.root)
        .ok_or_else(|| JsValue::from_str("theme root element not found"))?;

    let mut controller = ThemeController::new(LocalStorage::new(), ClassListTarget::new(root));
    if let Some(selector) = SelectElement::find(&document, &config.selector_id) {
        controller = controller.with_selector(selector);
    }
    Ok(controller.with_config(config).into_shared())
}

/// Replaces the running session, if any, with one built from `config`.
///
/// The previous controller is detached first so its markers and selector
/// listeners do not outlive it.
fn start_session(config: ControllerConfig) -> Result<String, JsValue> {
    let controller = build_session(config)?;
    if let Some(previous) = SESSION.with(|session| session.borrow_mut().take()) {
        detach_session(&previous);
    }
    let theme = ThemeController::init_theme(&controller);
    SESSION.with(|session| *session.borrow_mut() = Some(controller));
    debug!(theme = %theme, "theme session started");
    Ok(theme.as_str().to_string())
}

fn detach_session(previous: &BrowserController) {
    match previous.try_borrow_mut() {
        Ok(mut controller) => controller.detach(),
        Err(_) => warn!("previous theme session busy, not detached"),
    }
}

fn session() -> Result<BrowserController, JsValue> {
    if let Some(controller) = SESSION.with(|session| session.borrow().clone()) {
        return Ok(controller);
    }
    start_session(ControllerConfig::default())?;
    SESSION
        .with(|session| session.borrow().clone())
        .ok_or_else(|| JsValue::from_str("theme session not initialised"))
}

// ──────────────────────────────────────────────────────────────────────────────
// JavaScript API
// ──────────────────────────────────────────────────────────────────────────────

/// Module entry point.
///
/// With the `autostart` feature, schedules [`init_theme`] for when the
/// document structure is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "autostart")]
    schedule_init()?;

    Ok(())
}

#[cfg(feature = "autostart")]
fn schedule_init() -> Result<(), JsValue> {
    let document = document()?;
    if crate::host::structure_ready(&document.ready_state()) {
        return init_theme().map(|_| ());
    }

    let onready = Closure::<dyn FnMut()>::new(|| {
        if let Err(err) = init_theme() {
            warn!(error = ?err, "theme initialisation failed");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", onready.as_ref().unchecked_ref())?;
    onready.forget();
    debug!("theme initialisation deferred to DOMContentLoaded");
    Ok(())
}

/// Restores the saved theme with the default configuration.
///
/// Returns the applied theme name.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> Result<String, JsValue> {
    start_session(ControllerConfig::default())
}

/// Restores the saved theme with a configuration object such as
/// `{ storageKey: "site-theme", root: "documentElement" }`.
#[wasm_bindgen(js_name = initThemeWith)]
pub fn init_theme_with(config: JsValue) -> Result<String, JsValue> {
    let config: ControllerConfig = if config.is_undefined() || config.is_null() {
        ControllerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    start_session(config)
}

/// Switches to `name` (or the default theme if `name` is not allowed).
///
/// Returns the applied theme name.
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(name: &str) -> Result<String, JsValue> {
    let controller = session()?;
    let theme = controller
        .try_borrow_mut()
        .map_err(|_| JsValue::from_str("theme controller busy"))?
        .apply_theme(name);
    Ok(theme.as_str().to_string())
}

#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Result<String, JsValue> {
    let controller = session()?;
    let theme = controller.borrow().current();
    Ok(theme.as_str().to_string())
}

/// The allowed theme names, default first.
#[wasm_bindgen]
pub fn themes() -> Vec<String> {
    ThemeName::ALL
        .iter()
        .map(|theme| theme.as_str().to_string())
        .collect()
}
