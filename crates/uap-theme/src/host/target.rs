//! The element that carries the theme marker.

use crate::theme::{ThemeName, THEME_MARKER_PREFIX};

/// An element with a whitespace-separated class list.
pub trait ThemeTarget {
    /// Adds `marker` to the class list if it is not already there.
    fn add_marker(&mut self, marker: &str);

    /// Removes `marker` from the class list if present.
    fn remove_marker(&mut self, marker: &str);

    fn has_marker(&self, marker: &str) -> bool;

    /// Leaves `theme`'s marker as the only theme marker on the element.
    ///
    /// Every allowed marker is removed before the new one is added, so a
    /// marker set by some other script cannot survive. Classes that are
    /// not theme markers are not touched.
    fn set_marker(&mut self, theme: ThemeName) {
        self.clear_markers();
        self.add_marker(theme.marker());
    }

    /// Removes every allowed theme marker.
    fn clear_markers(&mut self) {
        for theme in ThemeName::ALL {
            self.remove_marker(theme.marker());
        }
    }
}

/// In-memory [`ThemeTarget`] keeping classes in insertion order.
///
/// # Example
///
/// ```rust
/// use uap_theme::{MemoryTarget, ThemeName, ThemeTarget};
///
/// let mut body = MemoryTarget::with_classes(["page", "theme-rose"]);
/// body.set_marker(ThemeName::Dark);
/// assert_eq!(body.classes(), ["page", "theme-dark"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    classes: Vec<String>,
}

impl MemoryTarget {
    /// Creates an element with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element that already carries `classes`.
    pub fn with_classes<I, C>(classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let mut target = Self::new();
        for class in classes {
            let class: String = class.into();
            target.add_marker(&class);
        }
        target
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Classes starting with `theme-`, whether or not they are allowed names.
    pub fn theme_markers(&self) -> Vec<&str> {
        self.classes
            .iter()
            .map(String::as_str)
            .filter(|class| class.starts_with(THEME_MARKER_PREFIX))
            .collect()
    }
}

impl ThemeTarget for MemoryTarget {
    fn add_marker(&mut self, marker: &str) {
        if !self.has_marker(marker) {
            self.classes.push(marker.to_string());
        }
    }

    fn remove_marker(&mut self, marker: &str) {
        self.classes.retain(|class| class != marker);
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.classes.iter().any(|class| class == marker)
    }
}
