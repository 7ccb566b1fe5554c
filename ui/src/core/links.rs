//! Static navigation destinations and active-route matching.

use crate::t;

/// The seven top-level destinations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Notes,
    Sheet,
    CodeAnalyzer,
    Progress,
    Contributors,
    Companies,
}

pub const DESTINATIONS: [Destination; 7] = [
    Destination::Home,
    Destination::Notes,
    Destination::Sheet,
    Destination::CodeAnalyzer,
    Destination::Progress,
    Destination::Contributors,
    Destination::Companies,
];

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
            Destination::Notes => "/notes",
            Destination::Sheet => "/sheet",
            Destination::CodeAnalyzer => "/code-analyzer",
            Destination::Progress => "/progress",
            Destination::Contributors => "/contributors",
            Destination::Companies => "/companies",
        }
    }

    /// Localized label. Call `i18n::init()` first.
    pub fn label(self) -> String {
        match self {
            Destination::Home => t!("nav-home"),
            Destination::Notes => t!("nav-notes"),
            Destination::Sheet => t!("nav-sheet"),
            Destination::CodeAnalyzer => t!("nav-code-analyzer"),
            Destination::Progress => t!("nav-progress"),
            Destination::Contributors => t!("nav-contributors"),
            Destination::Companies => t!("nav-companies"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub destination: Destination,
    pub is_active: bool,
}

impl NavLink {
    pub fn path(&self) -> &'static str {
        self.destination.path()
    }

    pub fn css_class(&self) -> &'static str {
        if self.is_active {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    }
}

/// Build the link set for `current_path`. Matching is exact: `/notes/1`
/// activates nothing.
pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    DESTINATIONS
        .iter()
        .map(|&destination| NavLink {
            destination,
            is_active: destination.path() == current_path,
        })
        .collect()
}

pub fn active_link(current_path: &str) -> Option<NavLink> {
    nav_links(current_path).into_iter().find(|l| l.is_active)
}

/// Axis-aligned box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Placement of the shared active-tab highlight inside the links container.
///
/// The highlight is one element that persists across renders; moving it by
/// style lets the CSS transition slide it from the old tab to the new one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighlightRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl HighlightRect {
    pub fn relative_to(container: Rect, link: Rect) -> Self {
        Self {
            left: link.x - container.x,
            top: link.y - container.y,
            width: link.width.max(0.0),
            height: link.height.max(0.0),
        }
    }

    /// Placement for a measured link, or `None` while the link has no box
    /// (its row is hidden below the desktop breakpoint).
    pub fn measure(container: Rect, link: Rect) -> Option<Self> {
        (link.width > 0.0 && link.height > 0.0).then(|| Self::relative_to(container, link))
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px); width: {:.1}px; height: {:.1}px;",
            self.left, self.top, self.width, self.height
        )
    }
}
