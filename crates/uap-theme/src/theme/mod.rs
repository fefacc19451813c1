//! Theme names and system color mode.
//!
//! This module provides:
//!
//! - [`ThemeName`]: The closed set of themes the stylesheet knows about
//! - [`ColorMode`]: Light or dark system preference
//! - [`system_color_mode`]: The default [`ColorModeDetector`]

mod mode;
mod name;

pub use mode::{system_color_mode, ColorMode, ColorModeDetector};
pub use name::{ThemeName, THEME_MARKER_PREFIX};
