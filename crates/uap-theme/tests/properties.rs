//! Property tests for theme application.

use proptest::prelude::*;
use uap_theme::{
    MemorySelector, MemoryStore, MemoryTarget, SelectorControl, ThemeController, ThemeName,
};

/// Everything a page visitor (or stylesheet) can observe.
#[derive(Debug, PartialEq, Eq)]
struct Observed {
    classes: Vec<String>,
    stored: Option<String>,
    selected: String,
    current: ThemeName,
}

fn observe_after(requests: &[&str]) -> Observed {
    let store = MemoryStore::new();
    let selector = MemorySelector::new();
    let mut controller = ThemeController::new(store.clone(), MemoryTarget::with_classes(["page"]))
        .with_selector(selector.clone());

    for request in requests {
        controller.apply_theme(request);
    }

    Observed {
        classes: controller.target().classes().to_vec(),
        stored: store.entry("uap-theme"),
        selected: selector.value(),
        current: controller.current(),
    }
}

fn allowed_theme() -> impl Strategy<Value = ThemeName> {
    prop::sample::select(ThemeName::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_unknown_name_matches_default(name in "\\PC*") {
        prop_assume!(ThemeName::lookup(&name).is_none());
        prop_assert_eq!(observe_after(&[name.as_str()]), observe_after(&["default"]));
    }

    #[test]
    fn test_allowed_name_is_fully_applied(theme in allowed_theme()) {
        let observed = observe_after(&[theme.as_str()]);
        let theme_classes: Vec<&str> = observed
            .classes
            .iter()
            .map(String::as_str)
            .filter(|class| class.starts_with("theme-"))
            .collect();

        prop_assert_eq!(theme_classes, vec![theme.marker()]);
        prop_assert_eq!(observed.stored.as_deref(), Some(theme.as_str()));
        prop_assert_eq!(observed.selected.as_str(), theme.as_str());
        prop_assert_eq!(observed.current, theme);
    }

    #[test]
    fn test_apply_is_idempotent(name in prop_oneof![
        allowed_theme().prop_map(|theme| theme.as_str().to_string()),
        "[a-z]{0,8}",
    ]) {
        prop_assert_eq!(
            observe_after(&[name.as_str(), name.as_str()]),
            observe_after(&[name.as_str()])
        );
    }

    #[test]
    fn test_last_apply_wins(first in allowed_theme(), second in allowed_theme()) {
        prop_assert_eq!(
            observe_after(&[first.as_str(), second.as_str()]),
            observe_after(&[second.as_str()])
        );
    }

    #[test]
    fn test_reload_round_trip(stored in prop_oneof![
        allowed_theme().prop_map(|theme| theme.as_str().to_string()),
        "\\PC{0,12}",
    ]) {
        let store = MemoryStore::new().with_entry("uap-theme", &stored);
        let page = ThemeController::new(store.clone(), MemoryTarget::new()).into_shared();

        let restored = ThemeController::init_theme(&page);

        let expected = ThemeName::lookup(&stored).unwrap_or_default();
        prop_assert_eq!(restored, expected);
        prop_assert_eq!(store.entry("uap-theme"), Some(expected.as_str().to_string()));
    }
}
