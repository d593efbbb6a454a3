//! Fallback for unknown routes

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "text-center py-24",
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Page Not Found" }
            p { class: "text-gray-500 mb-6", "Nothing lives at /{path}." }
            Link {
                to: Route::Organizations {},
                class: "text-indigo-600 hover:text-indigo-800 font-medium",
                "Back to Organizations"
            }
        }
    }
}
