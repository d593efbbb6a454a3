//! Server functions backed by the roster data service
//!
//! These run on the server; the browser calls them over HTTP.

use dioxus::prelude::*;
use roster::{Member, Organization};

/// Fetch one organization. `None` when the id is unknown.
#[server]
pub async fn fetch_organization(id: String) -> Result<Option<Organization>, ServerFnError> {
    server_client()?
        .get_organization(&id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Fetch an organization's members, ordered by display order
#[server]
pub async fn fetch_members(organization_id: String) -> Result<Vec<Member>, ServerFnError> {
    server_client()?
        .get_members(&organization_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Fetch every organization for the listing page
#[server]
pub async fn fetch_organizations() -> Result<Vec<Organization>, ServerFnError> {
    server_client()?
        .list_organizations()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Create a client for server-side requests (direct to API)
#[cfg(feature = "server")]
fn server_client() -> Result<roster::RosterClient, ServerFnError> {
    let config = crate::config::get().map_err(|e| ServerFnError::new(format!("{e:#}")))?;

    let client = roster::RosterClient::new(config.api_url.clone());
    Ok(match &config.api_token {
        Some(token) => client.with_token(token.clone()),
        None => client,
    })
}
