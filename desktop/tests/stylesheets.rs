#![cfg(test)]
//! Selector lint for the stylesheets the desktop build embeds.
//!
//! Release desktop builds inline `ui/assets/theme/main.css` and
//! `ui/assets/styling/navbar.css`, so a renamed class would only show up as a
//! styling regression at runtime. The navbar components emit the classes below.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar--top",
    ".navbar--scrolled",
    ".navbar__brand",
    ".navbar__brand-accent",
    ".navbar__search {",
    ".navbar__search--focused",
    ".navbar__search-sweep",
    ".navbar__search-input",
    ".navbar__search-clear",
    ".navbar__streak--idle",
    ".navbar__streak--active",
    ".navbar__streak-count",
    ".navbar__links",
    ".navbar__link {",
    ".navbar__link--active",
    ".navbar__highlight",
    ".navbar__mobile-actions",
    ".navbar__mobile-search",
    "@keyframes navbar-streak-pulse",
    "@keyframes navbar-sweep",
    "@media (min-width: 1024px)",
];

const THEME_TOKENS: &[&str] = &[":root", "--color-bg", "--color-fg", "body {", ".page-shell", ".page {"];

fn missing<'a>(css: &str, wanted: &[&'a str]) -> Vec<&'a str> {
    wanted.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn navbar_stylesheet_has_component_selectors() {
    let gone = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(gone.is_empty(), "navbar.css lost selectors:\n{}", gone.join("\n"));
}

#[test]
fn theme_defines_colors_the_navbar_reads() {
    let gone = missing(THEME_CSS, THEME_TOKENS);
    assert!(gone.is_empty(), "main.css lost tokens:\n{}", gone.join("\n"));
    for var in ["var(--color-bg)", "var(--color-fg)"] {
        assert!(NAVBAR_CSS.contains(var), "navbar.css no longer uses {var}");
    }
}

#[test]
fn highlight_moves_by_transition() {
    let block = NAVBAR_CSS
        .split(".navbar__highlight {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("highlight rule present");
    assert!(block.contains("transition:"), "highlight must animate its moves");
    assert!(block.contains("transform"), "highlight transition must cover transform");
}
