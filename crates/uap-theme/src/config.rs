//! Controller configuration.

use serde::{Deserialize, Serialize};

/// Storage key the active theme is persisted under.
pub const STORAGE_KEY: &str = "uap-theme";

/// Element id of the optional theme selector control.
pub const SELECTOR_ID: &str = "themeSelect";

/// Which element carries the theme marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeRoot {
    /// `document.body`.
    #[default]
    Body,
    /// `document.documentElement` (the `<html>` element).
    DocumentElement,
}

/// Settings for a [`ThemeController`](crate::ThemeController).
///
/// Every field has a default, so a partial object deserializes fine.
/// Field names are camelCase to match the JavaScript object passed to
/// `initThemeWith` in the browser.
///
/// # Example
///
/// ```rust
/// use uap_theme::{ControllerConfig, ThemeRoot};
///
/// let config = ControllerConfig::default();
/// assert_eq!(config.storage_key, "uap-theme");
/// assert_eq!(config.selector_id, "themeSelect");
/// assert_eq!(config.root, ThemeRoot::Body);
/// assert!(!config.follow_system_preference);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    /// Key of the persisted preference.
    pub storage_key: String,
    /// Id of the selector control kept in sync with the active theme.
    pub selector_id: String,
    /// Element the marker class goes on.
    pub root: ThemeRoot,
    /// Start in the dark theme on a first visit when the system prefers dark.
    pub follow_system_preference: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            selector_id: SELECTOR_ID.to_string(),
            root: ThemeRoot::default(),
            follow_system_preference: false,
        }
    }
}
