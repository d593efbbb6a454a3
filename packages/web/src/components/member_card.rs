//! Member card component

use dioxus::prelude::*;

use roster::{Member, MemberRole};

#[derive(Props, Clone, PartialEq)]
pub struct MemberCardProps {
    pub member: Member,
    pub role: MemberRole,
}

/// Photo (or initials), name, and position of one member
#[component]
pub fn MemberCard(props: MemberCardProps) -> Element {
    let member = &props.member;

    // Officers get a larger portrait
    let avatar_size = match props.role {
        MemberRole::Officer => "w-24 h-24 text-2xl",
        _ => "w-16 h-16 text-lg",
    };

    rsx! {
        div {
            class: "bg-white rounded-xl border border-gray-200 p-4 flex flex-col items-center text-center hover:shadow-md transition-shadow",

            if let Some(photo_url) = &member.photo_url {
                img {
                    class: "{avatar_size} rounded-full object-cover mb-3",
                    src: "{photo_url}",
                    alt: "{member.name}",
                }
            } else {
                div {
                    class: "{avatar_size} rounded-full bg-indigo-100 text-indigo-700 font-semibold flex items-center justify-center mb-3",
                    "{member.initials()}"
                }
            }

            h3 { class: "font-medium text-gray-900", "{member.name}" }

            if let Some(position) = &member.position {
                p { class: "text-sm text-gray-500 mt-1", "{position}" }
            }
        }
    }
}
