//! GraphQL query definitions

pub const GET_ORGANIZATION: &str = r#"
  query GetOrganization($id: ID!) {
    organization(id: $id) {
      id
      name
      category
      description
      adviser
    }
  }
"#;

pub const GET_MEMBERS: &str = r#"
  query GetMembers($organizationId: ID!) {
    organizationMembers(organizationId: $organizationId) {
      id
      organizationId
      name
      position
      photoUrl
      displayOrder
    }
  }
"#;

pub const LIST_ORGANIZATIONS: &str = r#"
  query ListOrganizations {
    organizations {
      id
      name
      category
      description
      adviser
    }
  }
"#;
