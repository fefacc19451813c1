//! The fixed allow-list of theme names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::UnknownThemeError;

/// Prefix shared by every root marker class.
pub const THEME_MARKER_PREFIX: &str = "theme-";

/// One of the themes the stylesheet provides rules for.
///
/// The set is closed: stylesheet authors style exactly these names, and
/// anything else is normalized to [`ThemeName::Default`] before it reaches
/// the page.
///
/// # Example
///
/// ```rust
/// use uap_theme::ThemeName;
///
/// assert_eq!(ThemeName::resolve("golden"), ThemeName::Golden);
/// assert_eq!(ThemeName::resolve("neon"), ThemeName::Default);
/// assert_eq!(ThemeName::Dark.marker(), "theme-dark");
/// assert!("neon".parse::<ThemeName>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Rose,
    Tulip,
    Beach,
    Golden,
    Dark,
}

impl ThemeName {
    /// Every allowed theme, in display order. The first entry is the fallback.
    pub const ALL: [ThemeName; 6] = [
        ThemeName::Default,
        ThemeName::Rose,
        ThemeName::Tulip,
        ThemeName::Beach,
        ThemeName::Golden,
        ThemeName::Dark,
    ];

    /// The name as stored and as shown in the selector control.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Rose => "rose",
            ThemeName::Tulip => "tulip",
            ThemeName::Beach => "beach",
            ThemeName::Golden => "golden",
            ThemeName::Dark => "dark",
        }
    }

    /// The class placed on the root element, e.g. `theme-rose`.
    pub fn marker(self) -> &'static str {
        match self {
            ThemeName::Default => "theme-default",
            ThemeName::Rose => "theme-rose",
            ThemeName::Tulip => "theme-tulip",
            ThemeName::Beach => "theme-beach",
            ThemeName::Golden => "theme-golden",
            ThemeName::Dark => "theme-dark",
        }
    }

    /// Looks up an allowed name, case-sensitively.
    pub fn lookup(name: &str) -> Option<ThemeName> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }

    /// Resolves any requested name to an allowed theme.
    ///
    /// Names outside the allow-list silently become [`ThemeName::Default`];
    /// this never fails.
    pub fn resolve(requested: &str) -> ThemeName {
        Self::lookup(requested).unwrap_or_else(|| {
            warn!(requested, "unknown theme requested, using default");
            ThemeName::Default
        })
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| UnknownThemeError {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_starts_with_default() {
        assert_eq!(ThemeName::ALL[0], ThemeName::default());
        assert_eq!(ThemeName::ALL.len(), 6);
    }

    #[test]
    fn test_markers_use_prefix() {
        for theme in ThemeName::ALL {
            assert_eq!(
                theme.marker(),
                format!("{}{}", THEME_MARKER_PREFIX, theme.as_str())
            );
        }
    }

    #[test]
    fn test_resolve_known_names() {
        assert_eq!(ThemeName::resolve("rose"), ThemeName::Rose);
        assert_eq!(ThemeName::resolve("tulip"), ThemeName::Tulip);
        assert_eq!(ThemeName::resolve("beach"), ThemeName::Beach);
        assert_eq!(ThemeName::resolve("dark"), ThemeName::Dark);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert_eq!(ThemeName::resolve("Dark"), ThemeName::Default);
        assert_eq!(ThemeName::resolve(" dark"), ThemeName::Default);
    }

    #[test]
    fn test_resolve_unknown_and_empty() {
        assert_eq!(ThemeName::resolve("neon"), ThemeName::Default);
        assert_eq!(ThemeName::resolve(""), ThemeName::Default);
        assert_eq!(ThemeName::resolve("theme-dark"), ThemeName::Default);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "neon".parse::<ThemeName>().unwrap_err();
        assert_eq!(err.name, "neon");
        assert_eq!("beach".parse::<ThemeName>(), Ok(ThemeName::Beach));
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ThemeName::Golden.to_string(), "golden");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&ThemeName::Tulip).unwrap();
        assert_eq!(json, "\"tulip\"");

        let parsed: ThemeName = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(parsed, ThemeName::Default);

        assert!(serde_json::from_str::<ThemeName>("\"neon\"").is_err());
    }
}
