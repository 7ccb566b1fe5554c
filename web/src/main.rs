use dioxus::prelude::*;

use ui::components::navigation_bar::{register_nav, NavBuilder};
use ui::components::NavigationBar;
use ui::views::{
    use_search_provider, CodeAnalyzer, Companies, Contributors, Home, Notes, Progress, Sheet,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

// Sign-in lives on the server; the navbar only needs an entry point.
fn auth_controls() -> Element {
    rsx!(a { class: "auth-link", href: "/login", "Sign in" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            auth: auth_controls,
        });
    }

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: the shared navbar fed by the web `Route` enum, plus the
/// routed page.
#[component]
fn WebNavbar() -> Element {
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
