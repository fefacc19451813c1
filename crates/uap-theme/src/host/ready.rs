//! Document lifecycle.

/// Whether a document in `ready_state` has its structure parsed.
///
/// Takes the string `document.readyState` reports. Anything but
/// `"loading"` means the theme can be initialised right away; otherwise
/// initialisation waits for `DOMContentLoaded`.
pub fn structure_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_waits() {
        assert!(!structure_ready("loading"));
    }

    #[test]
    fn test_interactive_and_complete_are_ready() {
        assert!(structure_ready("interactive"));
        assert!(structure_ready("complete"));
    }
}
