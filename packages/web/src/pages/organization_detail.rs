//! Organization detail page

use dioxus::prelude::*;

use roster::{MemberListView, Organization, OrganizationView};

use crate::api::{fetch_members, fetch_organization};
use crate::components::{LoadingSpinner, MemberRoster};
use crate::routes::Route;

/// One organization and its roster.
///
/// The organization and its members are fetched independently; each fetch
/// owns its own state and is dropped when the user navigates away.
#[component]
pub fn OrganizationDetail(id: String) -> Element {
    // Register both fetches before suspending on either
    let organization = use_server_future(use_reactive!(|id| fetch_organization(id)));
    let members = use_server_future(use_reactive!(|id| fetch_members(id)));

    // Only the organization suspends the page; the layout shows the spinner.
    let organization = organization?;
    let org_view = OrganizationView::from_pending(&id, organization.read().clone());

    let member_view = match members {
        Ok(members) => MemberListView::from_pending(&id, members.read().clone()),
        Err(_) => MemberListView::Loading,
    };

    rsx! {
        div {
            Link {
                to: Route::Organizations {},
                class: "inline-flex items-center text-sm text-indigo-600 hover:text-indigo-800 mb-6",
                "\u{2190} All Organizations"
            }

            match org_view {
                OrganizationView::Loading => rsx! { LoadingSpinner {} },
                OrganizationView::NotFound => rsx! { OrganizationNotFound {} },
                OrganizationView::Loaded(org) => rsx! {
                    OrganizationHeader { organization: org }
                    MemberRoster { view: member_view }
                },
            }
        }
    }
}

#[component]
fn OrganizationHeader(organization: Organization) -> Element {
    rsx! {
        document::Title { "{organization.name}" }

        div {
            class: "bg-white rounded-xl border border-gray-200 p-6 sm:p-8",
            span {
                class: "inline-block px-2.5 py-1 rounded-full text-xs font-medium bg-indigo-50 text-indigo-700 mb-3",
                "{organization.category}"
            }
            h1 { class: "text-3xl font-bold text-gray-900", "{organization.name}" }
            if let Some(description) = &organization.description {
                p { class: "mt-4 text-gray-600 whitespace-pre-line", "{description}" }
            }
            if let Some(adviser) = &organization.adviser {
                p {
                    class: "mt-4 text-sm text-gray-500",
                    span { class: "font-medium text-gray-700", "Adviser: " }
                    "{adviser}"
                }
            }
        }
    }
}

#[component]
fn OrganizationNotFound() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 p-12 text-center",
            h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Organization Not Found" }
            p {
                class: "text-gray-500 mb-6",
                "This organization doesn't exist or couldn't be loaded."
            }
            Link {
                to: Route::Organizations {},
                class: "inline-block px-4 py-2 rounded-lg bg-indigo-600 text-white hover:bg-indigo-700",
                "Back to Organizations"
            }
        }
    }
}
