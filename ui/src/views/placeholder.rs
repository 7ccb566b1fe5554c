use dioxus::prelude::*;

use crate::core::links::Destination;

#[component]
fn Placeholder(destination: Destination) -> Element {
    rsx! {
        section { class: "page page-placeholder",
            h1 { {destination.label()} }
            p { {crate::t!("page-placeholder")} }
        }
    }
}

#[component]
pub fn Notes() -> Element {
    rsx! { Placeholder { destination: Destination::Notes } }
}

#[component]
pub fn Sheet() -> Element {
    rsx! { Placeholder { destination: Destination::Sheet } }
}

#[component]
pub fn CodeAnalyzer() -> Element {
    rsx! { Placeholder { destination: Destination::CodeAnalyzer } }
}

#[component]
pub fn Progress() -> Element {
    rsx! { Placeholder { destination: Destination::Progress } }
}

#[component]
pub fn Contributors() -> Element {
    rsx! { Placeholder { destination: Destination::Contributors } }
}

#[component]
pub fn Companies() -> Element {
    rsx! { Placeholder { destination: Destination::Companies } }
}
