//! Page state for the organization detail view
//!
//! The detail page runs two independent fetches. Each one resolves into its
//! own state value here; neither waits on the other.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, MemberGroups};
use crate::types::{sort_by_display_order, Member, Organization};

/// State of the organization header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrganizationView {
    Loading,
    /// Either the record does not exist or the fetch failed.
    NotFound,
    Loaded(Organization),
}

impl OrganizationView {
    /// Resolve a finished organization fetch.
    ///
    /// Errors and missing records collapse into `NotFound`.
    pub fn from_fetch<E: Display>(id: &str, result: Result<Option<Organization>, E>) -> Self {
        match result {
            Ok(Some(org)) => OrganizationView::Loaded(org),
            Ok(None) => {
                tracing::debug!(organization_id = %id, "Organization not found");
                OrganizationView::NotFound
            }
            Err(e) => {
                tracing::warn!(organization_id = %id, error = %e, "Failed to fetch organization");
                OrganizationView::NotFound
            }
        }
    }

    /// Resolve from an optional fetch result; `None` means still pending.
    pub fn from_pending<E: Display>(
        id: &str,
        result: Option<Result<Option<Organization>, E>>,
    ) -> Self {
        match result {
            Some(result) => Self::from_fetch(id, result),
            None => OrganizationView::Loading,
        }
    }
}

/// State of the member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberListView {
    Loading,
    /// "No members listed yet"
    Empty,
    Grouped(MemberGroups),
}

impl MemberListView {
    /// Resolve a finished member fetch.
    ///
    /// A failed fetch is treated as an empty list and never shown to the user.
    pub fn from_fetch<E: Display>(organization_id: &str, result: Result<Vec<Member>, E>) -> Self {
        let members = match result {
            Ok(members) => members,
            Err(e) => {
                tracing::warn!(
                    organization_id = %organization_id,
                    error = %e,
                    "Failed to fetch members, showing empty roster"
                );
                Vec::new()
            }
        };

        Self::from_members(members)
    }

    /// Resolve from an optional fetch result; `None` means still pending.
    pub fn from_pending<E: Display>(
        organization_id: &str,
        result: Option<Result<Vec<Member>, E>>,
    ) -> Self {
        match result {
            Some(result) => Self::from_fetch(organization_id, result),
            None => MemberListView::Loading,
        }
    }

    /// Sort by display order and classify
    pub fn from_members(mut members: Vec<Member>) -> Self {
        if members.is_empty() {
            return MemberListView::Empty;
        }

        sort_by_display_order(&mut members);
        MemberListView::Grouped(classify(members))
    }

    /// Groups to render; `None` for the loading and empty states
    pub fn groups(&self) -> Option<&MemberGroups> {
        match self {
            MemberListView::Grouped(groups) => Some(groups),
            _ => None,
        }
    }

    pub fn member_count(&self) -> usize {
        match self {
            MemberListView::Grouped(groups) => groups.len(),
            _ => 0,
        }
    }
}
