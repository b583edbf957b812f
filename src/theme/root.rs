//! The root presentation element and its `dark` marker.

/// Class placed on the root element while dark mode is active.
pub const DARK_MARKER: &str = "dark";

/// Class list of the page's root element.
///
/// All dark-mode styling keys off [`DARK_MARKER`] on this element. Adding a
/// class that is already present is a no-op, so a class appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    classes: Vec<String>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Value for the element's `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_class_is_idempotent() {
        let mut root = RootElement::new();
        root.add_class(DARK_MARKER);
        root.add_class(DARK_MARKER);
        assert_eq!(root.classes(), &["dark".to_string()]);
    }

    #[test]
    fn test_remove_class() {
        let mut root = RootElement::new();
        root.add_class("antialiased");
        root.add_class(DARK_MARKER);
        root.remove_class(DARK_MARKER);
        assert!(!root.has_class(DARK_MARKER));
        assert_eq!(root.class_attr(), "antialiased");
    }

    #[test]
    fn test_remove_missing_class_is_noop() {
        let mut root = RootElement::new();
        root.remove_class(DARK_MARKER);
        assert_eq!(root.class_attr(), "");
    }
}
