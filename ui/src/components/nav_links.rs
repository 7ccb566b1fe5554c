use std::collections::HashMap;
use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;

use crate::core::links::{active_link, nav_links, HighlightRect, Rect};

/// Stable identity of the shared highlight element.
const HIGHLIGHT_ID: &str = "active-tab";

fn to_rect(r: PixelsRect) -> Rect {
    Rect {
        x: r.origin.x,
        y: r.origin.y,
        width: r.size.width,
        height: r.size.height,
    }
}

/// The seven destination links with a single highlight that slides to the
/// active one.
#[component]
pub fn NavLinks(current_path: String) -> Element {
    let mut container = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut nodes = use_signal(HashMap::<&'static str, Rc<MountedData>>::new);
    let mut highlight = use_signal(|| Option::<HighlightRect>::None);
    // Bumped whenever the container box changes size.
    let mut layout = use_signal(|| 0u32);

    use_effect(use_reactive((&current_path,), move |(path,)| {
        layout();
        let Some(active) = active_link(&path) else {
            highlight.set(None);
            return;
        };
        // Re-run once the active link and container have mounted.
        let target = nodes.read().get(active.path()).cloned();
        let frame = container.read().as_ref().cloned();
        let (Some(target), Some(frame)) = (target, frame) else {
            return;
        };
        spawn(async move {
            let (Ok(link), Ok(outer)) = (target.get_client_rect().await, frame.get_client_rect().await)
            else {
                return;
            };
            highlight.set(HighlightRect::measure(to_rect(outer), to_rect(link)));
        });
    }));

    let links = nav_links(&current_path);

    rsx! {
        div {
            class: "navbar__links",
            onmounted: move |evt: MountedEvent| container.set(Some(evt.data())),
            // Breakpoints show the row or resize its links; measure again.
            onresize: move |_| layout += 1,
            if let Some(rect) = highlight() {
                span {
                    class: "navbar__highlight",
                    "data-layout-id": "{HIGHLIGHT_ID}",
                    aria_hidden: "true",
                    style: "{rect.style()}",
                }
            }
            for link in links {
                div {
                    key: "{link.path()}",
                    class: "navbar__link-item",
                    onmounted: move |evt: MountedEvent| {
                        nodes.write().insert(link.path(), evt.data());
                    },
                    Link {
                        class: "{link.css_class()}",
                        to: link.path(),
                        span { class: "navbar__link-label", {link.destination.label()} }
                    }
                }
            }
        }
    }
}
