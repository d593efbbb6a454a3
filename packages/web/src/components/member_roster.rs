//! Member roster grouped into officers, representatives, and members

use dioxus::prelude::*;

use roster::{Member, MemberListView, MemberRole};

use super::{LoadingDots, MemberCard};

/// Member list for the organization detail page
#[component]
pub fn MemberRoster(view: MemberListView) -> Element {
    let sections: Vec<(MemberRole, Vec<Member>)> = view
        .groups()
        .map(|groups| {
            groups
                .sections()
                .into_iter()
                .map(|(role, members)| (role, members.to_vec()))
                .collect()
        })
        .unwrap_or_default();
    let count = view.member_count();

    rsx! {
        section {
            class: "mt-10",
            h2 {
                class: "text-xl font-semibold text-gray-900 mb-4",
                "Members"
                if count > 0 {
                    span { class: "ml-2 text-base font-normal text-gray-500", "({count})" }
                }
            }

            match view {
                MemberListView::Loading => rsx! {
                    div { class: "py-8 flex justify-center", LoadingDots {} }
                },
                MemberListView::Empty => rsx! {
                    div {
                        class: "bg-white rounded-lg border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No members listed yet" }
                    }
                },
                MemberListView::Grouped(_) => rsx! {
                    div {
                        class: "space-y-10",
                        for (role, members) in sections.iter() {
                            MemberSection { key: "{role.heading()}", role: *role, members: members.clone() }
                        }
                    }
                },
            }
        }
    }
}

/// One heading plus a responsive grid of member cards
#[component]
pub fn MemberSection(role: MemberRole, members: Vec<Member>) -> Element {
    let grid = match role {
        MemberRole::Officer => "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
        _ => "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4",
    };
    let count = members.len();

    rsx! {
        div {
            h3 {
                class: "text-sm font-semibold uppercase tracking-wide text-gray-500 mb-3",
                "{role.heading()} ({count})"
            }
            div {
                class: "{grid}",
                for member in members.iter() {
                    MemberCard { key: "{member.id}", member: member.clone(), role }
                }
            }
        }
    }
}
