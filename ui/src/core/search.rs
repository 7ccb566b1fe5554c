//! Controlled search field wiring.
//!
//! The term itself belongs to the parent. This module only decides what the
//! fields display and what gets forwarded when the user edits or clears.

use dioxus::prelude::EventHandler;

/// Delay before the mobile search input takes focus, so the panel's entry
/// animation can finish first.
pub const MOBILE_FOCUS_DELAY_MS: u64 = 100;

/// Receiver of search edits.
pub trait SearchSink {
    fn send(&self, term: String);
}

impl SearchSink for EventHandler<String> {
    fn send(&self, term: String) {
        self.call(term);
    }
}

/// Whether the parent wired a change callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchBinding<S> {
    Bound(S),
    Unbound,
}

pub type SearchCallback = SearchBinding<EventHandler<String>>;

impl<S> From<Option<S>> for SearchBinding<S> {
    fn from(sink: Option<S>) -> Self {
        match sink {
            Some(sink) => SearchBinding::Bound(sink),
            None => SearchBinding::Unbound,
        }
    }
}

impl<S: SearchSink> SearchBinding<S> {
    /// Forward the field's full current text.
    pub fn edit(&self, text: String) {
        match self {
            SearchBinding::Bound(sink) => sink.send(text),
            SearchBinding::Unbound => {}
        }
    }

    pub fn clear(&self) {
        self.edit(String::new());
    }
}

pub fn display_value(term: Option<&str>) -> &str {
    term.unwrap_or_default()
}

pub fn shows_clear(term: Option<&str>) -> bool {
    !display_value(term).is_empty()
}

/// Visibility of the collapsible mobile search panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileSearch {
    open: bool,
}

impl MobileSearch {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Focus state of the desktop field. Cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    Focused,
    #[default]
    Blurred,
}

impl SearchFocus {
    pub fn css_class(self) -> &'static str {
        match self {
            SearchFocus::Focused => "navbar__search navbar__search--focused",
            SearchFocus::Blurred => "navbar__search",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Spy {
        calls: RefCell<Vec<String>>,
    }

    impl SearchSink for &Spy {
        fn send(&self, term: String) {
            self.calls.borrow_mut().push(term);
        }
    }

    #[test]
    fn each_edit_forwards_full_text() {
        let spy = Spy::default();
        let binding = SearchBinding::Bound(&spy);
        for text in ["t", "tw", "two", "two sum"] {
            binding.edit(text.to_string());
        }
        assert_eq!(*spy.calls.borrow(), ["t", "tw", "two", "two sum"]);
    }

    #[test]
    fn clear_forwards_empty_string() {
        let spy = Spy::default();
        SearchBinding::Bound(&spy).clear();
        assert_eq!(*spy.calls.borrow(), [""]);
    }

    #[test]
    fn unbound_edits_are_noops() {
        let binding: SearchBinding<&Spy> = None.into();
        assert!(matches!(binding, SearchBinding::Unbound));
        binding.edit("ignored".into());
        binding.clear();
    }

    #[test]
    fn display_reflects_parent_value() {
        assert_eq!(display_value(None), "");
        assert_eq!(display_value(Some("graphs")), "graphs");
        assert!(!shows_clear(None));
        assert!(!shows_clear(Some("")));
        assert!(shows_clear(Some("dp")));
    }

    #[test]
    fn mobile_panel_toggles() {
        let mut panel = MobileSearch::default();
        assert!(!panel.is_open());
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn focus_drives_emphasis_class() {
        assert_eq!(SearchFocus::default(), SearchFocus::Blurred);
        assert!(SearchFocus::Focused.css_class().contains("--focused"));
        assert!(!SearchFocus::Blurred.css_class().contains("--focused"));
    }
}
