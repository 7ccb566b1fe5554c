use std::rc::Rc;

use dioxus::prelude::*;

use super::icons::{CloseIcon, SearchIcon};
use crate::core::search::{
    display_value, shows_clear, SearchCallback, SearchFocus, MOBILE_FOCUS_DELAY_MS,
};
use crate::core::timing;
use crate::t;

/// Inline search field shown on wide layouts.
#[component]
pub fn DesktopSearch(
    #[props(!optional)] term: Option<String>,
    binding: SearchCallback,
) -> Element {
    let mut focus = use_signal(SearchFocus::default);
    let value = display_value(term.as_deref()).to_string();
    let has_clear = shows_clear(term.as_deref());

    rsx! {
        div { class: "{focus().css_class()}",
            div { class: "navbar__search-sweep", aria_hidden: "true" }
            div { class: "navbar__search-row",
                SearchIcon { class: "navbar__search-icon" }
                input {
                    r#type: "text",
                    class: "navbar__search-input",
                    placeholder: t!("search-placeholder"),
                    value: "{value}",
                    oninput: move |evt: FormEvent| binding.edit(evt.value()),
                    onfocus: move |_| focus.set(SearchFocus::Focused),
                    onblur: move |_| focus.set(SearchFocus::Blurred),
                }
                if has_clear {
                    button {
                        r#type: "button",
                        class: "navbar__search-clear",
                        aria_label: t!("search-clear"),
                        onclick: move |_| binding.clear(),
                        CloseIcon { class: "navbar__icon navbar__icon--small" }
                    }
                }
            }
        }
    }
}

/// Collapsible search panel for narrow layouts. Mounted only while open, and
/// takes focus once its entry animation has had time to run.
#[component]
pub fn MobileSearchPanel(
    #[props(!optional)] term: Option<String>,
    binding: SearchCallback,
) -> Element {
    let mut input = use_signal(|| Option::<Rc<MountedData>>::None);
    let value = display_value(term.as_deref()).to_string();
    let has_clear = shows_clear(term.as_deref());

    use_future(move || async move {
        timing::sleep_ms(MOBILE_FOCUS_DELAY_MS).await;
        let node = input.peek().as_ref().cloned();
        if let Some(node) = node {
            let _ = node.set_focus(true).await;
        }
    });

    rsx! {
        div { class: "navbar__mobile-search",
            div { class: "navbar__mobile-search-inner",
                SearchIcon { class: "navbar__search-icon navbar__icon--small" }
                input {
                    r#type: "text",
                    class: "navbar__search-input",
                    placeholder: t!("search-placeholder"),
                    value: "{value}",
                    onmounted: move |evt: MountedEvent| input.set(Some(evt.data())),
                    oninput: move |evt: FormEvent| binding.edit(evt.value()),
                }
                if has_clear {
                    button {
                        r#type: "button",
                        class: "navbar__search-clear",
                        aria_label: t!("search-clear"),
                        onclick: move |_| binding.clear(),
                        CloseIcon { class: "navbar__icon navbar__icon--small" }
                    }
                }
            }
        }
    }
}
