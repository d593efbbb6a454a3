//! Records served by the data service
//!
//! Field names follow the GraphQL schema (camelCase on the wire).

use serde::{Deserialize, Serialize};

// ============================================================================
// Organization
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    /// Supervising adult, shown as "Adviser" on the detail page.
    pub adviser: Option<String>,
}

// ============================================================================
// Member
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub organization_id: Option<String>,
    pub name: String,
    pub position: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: Option<i32>,
}

impl Member {
    /// Initials shown in place of a missing photo
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Sort members by display order, ascending, with unordered members last.
///
/// The sort is stable: ties keep the order the data service returned them in.
pub fn sort_by_display_order(members: &mut [Member]) {
    members.sort_by_key(|m| (m.display_order.is_none(), m.display_order));
}

/// First letter of up to two words of a display name, uppercased
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
