//! Member classification
//!
//! Positions are free text typed in by whoever maintains the roster, so the
//! classifier works on a normalized form and matches keywords as plain
//! substrings. Substring matching over-matches ("headquarters" contains
//! "head", "editorial" contains "editor"); that is the established behavior
//! and rosters are written against it.

use serde::{Deserialize, Serialize};

use crate::types::Member;

/// Titles that make a member an officer. Checked before anything else.
///
/// Includes the Filipino titles used by student publications.
pub const OFFICER_KEYWORDS: &[&str] = &[
    "president",
    "vice",
    "secretary",
    "treasurer",
    "auditor",
    "pio",
    "officer",
    "committee chair",
    "chairperson",
    "chair:",
    "chairs:",
    "head",
    "leader",
    "coordinator",
    "director",
    "editor",
    "manager",
    "punong",
    "patnugot",
    "katuwang",
    "tagapag-payo",
    "tagapagpayo",
    "litratista",
    "tagaguhit",
    "video editor",
];

/// Keywords for grade-level representation.
pub const REPRESENTATIVE_KEYWORDS: &[&str] = &["representative", "grade"];

/// Display bucket a member lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Officer,
    Representative,
    Member,
}

impl MemberRole {
    pub fn heading(&self) -> &'static str {
        match self {
            MemberRole::Officer => "Officers",
            MemberRole::Representative => "Representatives",
            MemberRole::Member => "Members",
        }
    }
}

/// Lowercase, drop every `.`, collapse whitespace runs, trim.
///
/// A missing position normalizes to the empty string.
pub fn normalize_position(position: Option<&str>) -> String {
    let Some(position) = position else {
        return String::new();
    };

    position
        .to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify a single position title
pub fn classify_position(position: Option<&str>) -> MemberRole {
    let normalized = normalize_position(position);

    if OFFICER_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        MemberRole::Officer
    } else if REPRESENTATIVE_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        MemberRole::Representative
    } else {
        MemberRole::Member
    }
}

/// Members partitioned by role, each group in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberGroups {
    pub officers: Vec<Member>,
    pub representatives: Vec<Member>,
    pub members: Vec<Member>,
}

impl MemberGroups {
    pub fn len(&self) -> usize {
        self.officers.len() + self.representatives.len() + self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty groups in display order
    pub fn sections(&self) -> Vec<(MemberRole, &[Member])> {
        [
            (MemberRole::Officer, self.officers.as_slice()),
            (MemberRole::Representative, self.representatives.as_slice()),
            (MemberRole::Member, self.members.as_slice()),
        ]
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .collect()
    }
}

/// Partition members into officers, representatives, and regular members.
///
/// Every member ends up in exactly one group and relative order is kept.
pub fn classify(members: impl IntoIterator<Item = Member>) -> MemberGroups {
    let mut groups = MemberGroups::default();

    for member in members {
        match classify_position(member.position.as_deref()) {
            MemberRole::Officer => groups.officers.push(member),
            MemberRole::Representative => groups.representatives.push(member),
            MemberRole::Member => groups.members.push(member),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_periods() {
        assert_eq!(normalize_position(Some("Asst. P.I.O.")), "asst pio");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(
            normalize_position(Some("  Grade  7\t\nRepresentative ")),
            "grade 7 representative"
        );
    }

    #[test]
    fn test_normalize_missing_position() {
        assert_eq!(normalize_position(None), "");
        assert_eq!(normalize_position(Some("   ")), "");
    }

    #[test]
    fn test_chair_keyword_keeps_colon() {
        assert_eq!(classify_position(Some("Chair: Sports")), MemberRole::Officer);
        assert_eq!(classify_position(Some("Chairs: Logistics")), MemberRole::Officer);
        assert_eq!(classify_position(Some("Committee Chair")), MemberRole::Officer);
        // "chair" alone is not an officer keyword
        assert_eq!(classify_position(Some("Chair")), MemberRole::Member);
    }

    #[test]
    fn test_sections_skip_empty_groups() {
        let groups = classify(vec![Member {
            id: "1".into(),
            organization_id: None,
            name: "Ana".into(),
            position: Some("Grade 8 Representative".into()),
            photo_url: None,
            display_order: None,
        }]);

        let sections = groups.sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, MemberRole::Representative);
        assert_eq!(sections[0].0.heading(), "Representatives");
    }
}
