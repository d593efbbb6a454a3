//! GraphQL client for the remote data service

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{ClientError, Result};
use crate::queries::{GET_MEMBERS, GET_ORGANIZATION, LIST_ORGANIZATIONS};
use crate::types::{Member, Organization};

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<V: Serialize> {
    pub query: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

/// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Serialize)]
struct IdVariables<'a> {
    id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrganizationIdVariables<'a> {
    organization_id: &'a str,
}

#[derive(Deserialize)]
struct GetOrganizationResponse {
    organization: Option<Organization>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetMembersResponse {
    organization_members: Vec<Member>,
}

#[derive(Deserialize)]
struct ListOrganizationsResponse {
    organizations: Vec<Organization>,
}

/// Client for the roster data service
#[derive(Debug, Clone)]
pub struct RosterClient {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl RosterClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            auth_token: None,
        }
    }

    /// Send a bearer token with every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a GraphQL query
    pub async fn query<V, R>(&self, query: &'static str, variables: Option<V>) -> Result<R>
    where
        V: Serialize,
        R: DeserializeOwned,
    {
        let request = GraphQLRequest { query, variables };

        let mut req = self.client.post(&self.endpoint).json(&request);

        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.bytes().await?;
        let graphql_response: GraphQLResponse<R> = serde_json::from_slice(&body)?;

        if let Some(first_error) = graphql_response.errors.as_ref().and_then(|e| e.first()) {
            return Err(ClientError::GraphQL(first_error.message.clone()));
        }

        graphql_response.data.ok_or(ClientError::NoData)
    }

    /// Fetch one organization. `Ok(None)` when the id is unknown.
    pub async fn get_organization(&self, id: &str) -> Result<Option<Organization>> {
        tracing::debug!(organization_id = %id, "Fetching organization");

        let response: GetOrganizationResponse = self
            .query(GET_ORGANIZATION, Some(IdVariables { id }))
            .await?;

        Ok(response.organization)
    }

    /// Fetch the members of an organization, ordered by display order
    pub async fn get_members(&self, organization_id: &str) -> Result<Vec<Member>> {
        tracing::debug!(organization_id = %organization_id, "Fetching members");

        let response: GetMembersResponse = self
            .query(GET_MEMBERS, Some(OrganizationIdVariables { organization_id }))
            .await?;

        Ok(response.organization_members)
    }

    /// Fetch every organization for the listing page
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        tracing::debug!("Fetching organizations");

        let response: ListOrganizationsResponse =
            self.query(LIST_ORGANIZATIONS, None::<()>).await?;

        Ok(response.organizations)
    }
}
