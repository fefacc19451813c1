//! System color mode detection.

use super::name::ThemeName;

/// The color mode the user's system prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// The theme a first-time visitor gets when the controller follows
    /// the system preference.
    pub fn preferred_theme(self) -> ThemeName {
        match self {
            ColorMode::Light => ThemeName::Default,
            ColorMode::Dark => ThemeName::Dark,
        }
    }
}

/// Reports the current system color mode.
///
/// Controllers take one of these so tests can force a mode.
pub type ColorModeDetector = fn() -> ColorMode;

/// Detects the system color mode.
///
/// In the browser this evaluates `(prefers-color-scheme: dark)`; natively
/// it asks the OS.
#[cfg(not(target_arch = "wasm32"))]
pub fn system_color_mode() -> ColorMode {
    use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

/// Detects the system color mode.
///
/// In the browser this evaluates `(prefers-color-scheme: dark)`; natively
/// it asks the OS.
#[cfg(target_arch = "wasm32")]
pub fn system_color_mode() -> ColorMode {
    let prefers_dark = web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);

    if prefers_dark {
        ColorMode::Dark
    } else {
        ColorMode::Light
    }
}
