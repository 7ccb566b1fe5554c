#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::navigation_bar::{register_nav, NavBuilder};
use ui::components::NavigationBar;
use ui::views::{
    use_search_provider, CodeAnalyzer, Companies, Contributors, Home, Notes, Progress, Sheet,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/notes")]
    Notes {},
    #[route("/sheet")]
    Sheet {},
    #[route("/code-analyzer")]
    CodeAnalyzer {},
    #[route("/progress")]
    Progress {},
    #[route("/contributors")]
    Contributors {},
    #[route("/companies")]
    Companies {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("DSAMate – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn auth_controls() -> Element {
    rsx!(a { class: "auth-link", href: "/login", "Sign in" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    register_nav(NavBuilder {
        auth: auth_controls,
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: the shared navbar fed by the desktop `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    let route: Route = use_route();
    let mut search = use_search_provider();

    rsx! {
        NavigationBar {
            current_path: route.to_string(),
            search_term: search.term(),
            on_search: move |term: String| search.set(term),
        }
        main { class: "page-shell", Outlet::<Route> {} }
    }
}
