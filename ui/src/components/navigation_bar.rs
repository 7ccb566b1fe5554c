use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use super::icons::SearchIcon;
use super::nav_links::NavLinks;
use super::search::{DesktopSearch, MobileSearchPanel};
use super::streak_badge::StreakBadge;
use crate::core::scroll::border_class;
use crate::core::search::{MobileSearch, SearchCallback};
use crate::hooks::{use_navbar_session, use_scroll_watcher};
use crate::i18n;
use crate::t;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform hooks for `NavigationBar`.
///
/// The auth controls (login/logout and the hamburger menu) live outside this
/// crate. A platform registers a builder once before rendering the root:
///
/// ```ignore
/// use ui::components::navigation_bar::{register_nav, NavBuilder};
/// fn auth_controls() -> Element {
///     rsx!( AuthButtons {} )
/// }
/// register_nav(NavBuilder { auth: auth_controls });
/// ```
///
/// `auth` is invoked twice per render, once for the desktop cluster and once
/// for the mobile cluster, and receives nothing from the navbar. Without a
/// registration both slots stay empty.
pub struct NavBuilder {
    pub auth: fn() -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Responsive top bar: brand, search, streak badge, links and auth controls.
///
/// `current_path` comes from the platform router. The search term is owned by
/// the parent; without `on_search` the fields display `search_term` read-only.
#[component]
pub fn NavigationBar(
    current_path: String,
    search_term: Option<String>,
    on_search: Option<EventHandler<String>>,
) -> Element {
    i18n::init();

    let session = use_navbar_session();
    let scrolled = use_scroll_watcher();
    let mut mobile_search = use_signal(MobileSearch::default);

    let binding = SearchCallback::from(on_search);
    let streak = session.read().streak();
    let auth = NAV_BUILDER.get().map(|b| b.auth);
    let nav_class = format!("navbar {}", border_class(scrolled()));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "{nav_class}", aria_label: t!("nav-main-label"),
            div { class: "navbar__inner",
                Link { class: "navbar__brand", to: "/",
                    span { class: "navbar__brand-mark",
                        "DSA"
                        span { class: "navbar__brand-accent", "Mate" }
                        " "
                        span { class: "navbar__brand-suffix", {t!("brand-template")} }
                    }
                }

                div { class: "navbar__search-desktop",
                    DesktopSearch { term: search_term.clone(), binding }
                }

                div { class: "navbar__cluster",
                    StreakBadge { streak }
                    NavLinks { current_path: current_path.clone() }
                    div { class: "navbar__auth",
                        if let Some(auth) = auth {
                            {auth()}
                        }
                    }
                }

                div { class: "navbar__mobile-actions",
                    button {
                        r#type: "button",
                        class: "navbar__icon-button",
                        aria_label: t!("search-toggle"),
                        aria_expanded: "{mobile_search().is_open()}",
                        onclick: move |_| mobile_search.with_mut(|s| s.toggle()),
                        SearchIcon { class: "navbar__icon" }
                    }
                    if let Some(auth) = auth {
                        {auth()}
                    }
                }
            }

            if mobile_search().is_open() {
                MobileSearchPanel { term: search_term.clone(), binding }
            }
        }
    }
}
