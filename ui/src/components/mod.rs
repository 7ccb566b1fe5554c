pub mod navigation_bar;
pub use navigation_bar::register_nav;
pub use navigation_bar::NavBuilder;
pub use navigation_bar::NavigationBar;

mod icons;
mod nav_links;
mod search;
mod streak_badge;

pub use nav_links::NavLinks;
pub use search::{DesktopSearch, MobileSearchPanel};
pub use streak_badge::StreakBadge;
