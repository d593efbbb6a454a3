//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-24",
            div {
                class: "w-10 h-10 border-4 border-indigo-200 border-t-indigo-600 rounded-full animate-spin"
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading..." }
        }
    }
}

/// Inline loading indicator
#[component]
pub fn LoadingDots() -> Element {
    let dot = "w-2.5 h-2.5 rounded-full bg-indigo-400 animate-pulse";

    rsx! {
        div {
            class: "flex items-center gap-1.5",
            span { class: "{dot}" }
            span { class: "{dot}", style: "animation-delay: 150ms" }
            span { class: "{dot}", style: "animation-delay: 300ms" }
        }
    }
}
