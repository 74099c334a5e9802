use crate::common::{session_with_role, user_with_role};
use portal::Session;
use pretty_assertions::assert_eq;
use shared_types::Role;

#[test]
fn default_session_is_logged_out() {
    assert_eq!(Session::default(), Session::LoggedOut);
    assert!(!Session::default().is_authenticated());
}

#[test]
fn login_over_an_existing_session_replaces_the_identity() {
    let mut session = session_with_role(Role::Employee);
    session.login(user_with_role(Role::ExecutiveBoard));
    assert_eq!(
        session.identity().map(|u| u.role),
        Some(Role::ExecutiveBoard)
    );
}

#[test]
fn logout_discards_the_whole_identity() {
    let mut session = session_with_role(Role::SystemAdmin);
    session.logout();
    assert!(session.identity().is_none());
    // A second logout stays harmless.
    session.logout();
    assert_eq!(session, Session::LoggedOut);
}

#[test]
fn identity_is_borrowed_not_copied() {
    let session = session_with_role(Role::TeamLead);
    let first = session.identity().map(|u| u.id);
    let second = session.identity().map(|u| u.id);
    assert_eq!(first, second);
}
