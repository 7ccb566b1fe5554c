use dioxus::prelude::*;

use super::SearchContext;

pub const QUESTIONS: &[&str] = &[
    "Two Sum",
    "Valid Parentheses",
    "Merge Two Sorted Lists",
    "Best Time to Buy and Sell Stock",
    "Binary Search",
    "Longest Substring Without Repeating Characters",
    "Number of Islands",
    "Course Schedule",
    "Coin Change",
    "LRU Cache",
];

/// Case-insensitive substring filter over the question titles.
pub fn matching_questions<'a>(questions: &[&'a str], term: &str) -> Vec<&'a str> {
    let needle = term.trim().to_lowercase();
    questions
        .iter()
        .copied()
        .filter(|q| needle.is_empty() || q.to_lowercase().contains(&needle))
        .collect()
}

#[component]
pub fn Home() -> Element {
    let term = try_use_context::<SearchContext>()
        .map(|ctx| ctx.term())
        .unwrap_or_default();
    let matches = matching_questions(QUESTIONS, &term);

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("page-home-title")} }
            if matches.is_empty() {
                p { class: "page-home__empty", {crate::t!("page-home-empty")} }
            } else {
                ul { class: "page-home__questions",
                    for question in matches {
                        li { key: "{question}", "{question}" }
                    }
                }
            }
        }
    }
}
