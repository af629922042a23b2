use super::*;
use crate::testing::{alice, member_role};

#[test]
fn badges_follow_flags() {
    assert_eq!(Badge::confirmation(true), Badge { label: "Confirmed", positive: true });
    assert_eq!(Badge::confirmation(false), Badge { label: "Unconfirmed", positive: false });
    assert_eq!(Badge::account(false), Badge { label: "Active", positive: true });
    assert_eq!(Badge::account(true), Badge { label: "Blocked", positive: false });
}

#[test]
fn projects_user_fields() {
    let mut user = alice();
    user.role = Some(member_role());
    let view = DashboardView::from_session(&Session::authenticated(user, "t1".to_owned()));

    assert_eq!(view.username, "alice");
    assert_eq!(view.email, "a@x.com");
    assert_eq!(view.user_id, "1");
    assert_eq!(view.confirmed.label, "Confirmed");
    assert_eq!(view.status.label, "Active");
    assert_eq!(view.role_name, "Authenticated");
    assert_eq!(view.role_type, "authenticated");
    assert_eq!(view.role_id, "2");
}

#[test]
fn missing_role_renders_placeholders() {
    let view = DashboardView::from_user(&alice());
    assert_eq!(view.role_id, PLACEHOLDER);
    assert_eq!(view.role_name, PLACEHOLDER);
    assert_eq!(view.role_description, PLACEHOLDER);
    assert_eq!(view.role_type, PLACEHOLDER);
}

#[test]
fn null_role_description_renders_placeholder() {
    let mut user = alice();
    let mut role = member_role();
    role.description = None;
    user.role = Some(role);
    assert_eq!(DashboardView::from_user(&user).role_description, PLACEHOLDER);
}

#[test]
fn blocked_unconfirmed_user() {
    let mut user = alice();
    user.confirmed = false;
    user.blocked = true;
    let view = DashboardView::from_user(&user);
    assert!(!view.confirmed.positive);
    assert_eq!(view.status.label, "Blocked");
}

#[test]
fn empty_session_renders_placeholders() {
    let view = DashboardView::from_session(&Session::empty());
    assert_eq!(view.username, PLACEHOLDER);
    assert_eq!(view.email, PLACEHOLDER);
    assert_eq!(view.user_id, PLACEHOLDER);
}
