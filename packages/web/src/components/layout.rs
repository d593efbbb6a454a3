//! Site layout wrapper

use dioxus::prelude::*;

use super::LoadingSpinner;
use crate::routes::Route;

/// Page chrome shared by every route
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            header {
                class: "bg-white border-b border-gray-200",
                div {
                    class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between",
                    Link {
                        to: Route::Organizations {},
                        class: "text-lg font-bold text-gray-900 hover:text-indigo-600",
                        "Organizations"
                    }
                }
            }

            main {
                class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                SuspenseBoundary {
                    fallback: |_| rsx! { LoadingSpinner {} },
                    Outlet::<Route> {}
                }
            }
        }
    }
}
