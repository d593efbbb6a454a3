//! Organization roster.
//!
//! Everything the organization pages need that is not markup: the
//! organization and member records, the position-based member classifier,
//! the per-view page state, and (with the `client` feature) a GraphQL
//! client for the remote data service.
//!
//! # Example
//!
//! ```rust,ignore
//! use roster::{classify, RosterClient};
//!
//! let client = RosterClient::new("http://localhost:8080/graphql");
//! let members = client.get_members("org-1").await?;
//! let groups = classify(members);
//! println!("{} officers", groups.officers.len());
//! ```

pub mod classify;
pub mod directory;
pub mod error;
pub mod types;
pub mod view;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod queries;

pub use classify::{classify, classify_position, normalize_position, MemberGroups, MemberRole};
pub use directory::{group_by_category, CategoryGroup};
pub use error::{ClientError, Result};
pub use types::{initials, sort_by_display_order, Member, Organization};
pub use view::{MemberListView, OrganizationView};

#[cfg(feature = "client")]
pub use client::RosterClient;
