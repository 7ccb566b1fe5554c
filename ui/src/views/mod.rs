//! Pages behind each navbar destination.
//!
//! Platform layouts own the search term and share it with pages through
//! `SearchContext`.

use dioxus::prelude::*;

mod home;
mod placeholder;

pub use home::{matching_questions, Home, QUESTIONS};
pub use placeholder::{CodeAnalyzer, Companies, Contributors, Notes, Progress, Sheet};

/// Lifted search term shared between the navbar and the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchContext(Signal<String>);

/// Provide a fresh, empty search term on the calling scope.
pub fn use_search_provider() -> SearchContext {
    use_context_provider(|| SearchContext(Signal::new(String::new())))
}

impl SearchContext {
    pub fn term(&self) -> String {
        (self.0)()
    }

    pub fn set(&mut self, term: String) {
        self.0.set(term);
    }
}
