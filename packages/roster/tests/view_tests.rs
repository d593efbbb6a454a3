//! Detail page state: organization header and member list.

use roster::{ClientError, Member, MemberListView, Organization, OrganizationView};

fn organization(id: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: "Ang Tanglaw".to_string(),
        category: "Publication".to_string(),
        description: Some("The official student publication".to_string()),
        adviser: Some("Ms. Santos".to_string()),
    }
}

fn member(id: &str, position: Option<&str>, display_order: Option<i32>) -> Member {
    Member {
        id: id.to_string(),
        organization_id: Some("org-1".to_string()),
        name: format!("Member {id}"),
        position: position.map(str::to_string),
        photo_url: None,
        display_order,
    }
}

fn ids(members: &[Member]) -> Vec<&str> {
    members.iter().map(|m| m.id.as_str()).collect()
}

fn unavailable() -> ClientError {
    ClientError::Api {
        status: 503,
        message: "service unavailable".to_string(),
    }
}

#[test]
fn known_organization_loads() {
    let view = OrganizationView::from_fetch::<ClientError>("org-1", Ok(Some(organization("org-1"))));

    assert_eq!(view, OrganizationView::Loaded(organization("org-1")));
}

#[test]
fn unknown_organization_is_not_found() {
    let view = OrganizationView::from_fetch::<ClientError>("does-not-exist", Ok(None));

    assert_eq!(view, OrganizationView::NotFound);
}

#[test]
fn failed_organization_fetch_is_not_found() {
    let view = OrganizationView::from_fetch("org-1", Err(unavailable()));

    assert_eq!(view, OrganizationView::NotFound);
}

#[test]
fn failed_member_fetch_shows_empty_roster() {
    let view = MemberListView::from_fetch("org-1", Err(ClientError::GraphQL("connection reset".into())));

    assert_eq!(view, MemberListView::Empty);
    assert_eq!(view.member_count(), 0);
    assert!(view.groups().is_none());
}

#[test]
fn organization_without_members_is_empty() {
    let view = MemberListView::from_fetch::<ClientError>("org-1", Ok(Vec::new()));

    assert_eq!(view, MemberListView::Empty);
    assert!(view.groups().is_none());
}

#[test]
fn members_are_grouped_in_display_order() {
    let view = MemberListView::from_fetch::<ClientError>(
        "org-1",
        Ok(vec![
            member("eic", Some("Punong Patnugot"), Some(1)),
            member("artist", Some("Tagaguhit"), Some(3)),
            member("rep", Some("Grade 7 Representative"), Some(5)),
            member("writer", Some("Mamamahayag"), None),
        ]),
    );
    let groups = view.groups().unwrap();

    assert_eq!(view.member_count(), 4);
    assert_eq!(ids(&groups.officers), vec!["eic", "artist"]);
    assert_eq!(ids(&groups.representatives), vec!["rep"]);
    assert_eq!(ids(&groups.members), vec!["writer"]);
}

#[test]
fn unsorted_members_are_sorted_before_classification() {
    let view = MemberListView::from_members(vec![
        member("late", Some("Secretary"), None),
        member("second", Some("Treasurer"), Some(2)),
        member("first", Some("President"), Some(1)),
    ]);

    assert_eq!(ids(&view.groups().unwrap().officers), vec!["first", "second", "late"]);
}

#[test]
fn pending_fetches_are_loading() {
    let org = OrganizationView::from_pending::<ClientError>("org-1", None);
    let members = MemberListView::from_pending::<ClientError>("org-1", None);

    assert_eq!(org, OrganizationView::Loading);
    assert_eq!(members, MemberListView::Loading);
    assert!(members.groups().is_none());
}

#[test]
fn members_resolve_while_organization_is_pending() {
    let org = OrganizationView::from_pending::<ClientError>("org-1", None);
    let members = MemberListView::from_pending::<ClientError>(
        "org-1",
        Some(Ok(vec![member("m1", Some("Auditor"), Some(1))])),
    );

    assert_eq!(org, OrganizationView::Loading);
    assert_eq!(members.member_count(), 1);
}

#[test]
fn organization_resolves_while_members_are_pending() {
    let org = OrganizationView::from_pending::<ClientError>("org-1", Some(Ok(Some(organization("org-1")))));
    let members = MemberListView::from_pending::<ClientError>("org-1", None);

    assert_eq!(org, OrganizationView::Loaded(organization("org-1")));
    assert_eq!(members, MemberListView::Loading);
}
