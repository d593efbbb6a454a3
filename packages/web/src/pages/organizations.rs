//! Organization listing page

use dioxus::prelude::*;

use roster::{group_by_category, CategoryGroup, Organization};

use crate::api::fetch_organizations;
use crate::components::LoadingSpinner;
use crate::routes::Route;

/// All organizations, grouped by category
#[component]
pub fn Organizations() -> Element {
    let orgs = use_server_future(fetch_organizations)?;

    let groups: Option<Result<Vec<CategoryGroup>, String>> = orgs
        .read()
        .clone()
        .map(|result| result.map(group_by_category).map_err(|e| e.to_string()));

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Organizations" }

            match groups {
                Some(Ok(groups)) if !groups.is_empty() => rsx! {
                    div {
                        class: "space-y-10",
                        for group in groups.iter() {
                            CategorySection { key: "{group.category}", group: group.clone() }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No organizations found." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error: {e}"
                    }
                },
                None => rsx! { LoadingSpinner {} },
            }
        }
    }
}

#[component]
fn CategorySection(group: CategoryGroup) -> Element {
    rsx! {
        section {
            h2 { class: "text-lg font-semibold text-gray-800 mb-3", "{group.category}" }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                for org in group.organizations.iter() {
                    OrgCard { key: "{org.id}", org: org.clone() }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct OrgCardProps {
    org: Organization,
}

#[component]
fn OrgCard(props: OrgCardProps) -> Element {
    let org = &props.org;

    rsx! {
        Link {
            to: Route::OrganizationDetail { id: org.id.clone() },
            class: "block bg-white rounded-lg shadow-sm border border-gray-200 p-4 hover:shadow-md transition-shadow",
            h3 { class: "font-medium text-gray-900 mb-1", "{org.name}" }
            if let Some(description) = &org.description {
                p { class: "text-sm text-gray-600 line-clamp-2", "{description}" }
            }
            if let Some(adviser) = &org.adviser {
                p { class: "text-xs text-gray-500 mt-2", "Adviser: {adviser}" }
            }
        }
    }
}
