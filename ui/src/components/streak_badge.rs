use dioxus::prelude::*;

use super::icons::FireIcon;
use crate::core::streak::Streak;

/// Fire badge; pulses while the streak is active.
#[component]
pub fn StreakBadge(streak: Streak) -> Element {
    let title = streak.title();

    rsx! {
        div { class: "{streak.css_class()}", title: "{title}",
            FireIcon { class: "navbar__streak-icon" }
            if let Some(count) = streak.numeral() {
                span { class: "navbar__streak-count", "{count}" }
            }
        }
    }
}
