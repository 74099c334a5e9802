use crate::common::session_with_role;
use portal::{resolve, ModuleId, PortalView, RouteDecision, Session};
use pretty_assertions::assert_eq;
use shared_types::Role;

#[test]
fn signed_out_sessions_always_get_the_login_view() {
    let session = Session::new();
    for path in ["/", "/kudos", "/employees", "/reports", "/nope", ""] {
        assert_eq!(resolve(&session, path), RouteDecision::Login, "{}", path);
    }
}

#[test]
fn every_role_reaches_its_visible_modules() {
    for role in Role::ALL {
        let session = session_with_role(role);
        for module in portal::registry::visible_modules(role) {
            match resolve(&session, module.route_path) {
                RouteDecision::Render {
                    view: PortalView::Module(id),
                    ..
                } => assert_eq!(id, module.id),
                other => panic!("{:?} at {} got {:?}", role, module.route_path, other),
            }
        }
    }
}

#[test]
fn every_role_is_denied_outside_its_set() {
    for role in Role::ALL {
        let session = session_with_role(role);
        for module in portal::registry::list_modules() {
            if portal::policy::is_module_visible(role, module.id) {
                continue;
            }
            assert_eq!(
                resolve(&session, module.route_path),
                RouteDecision::AccessDenied { fallback_path: "/" },
                "{:?} at {}",
                role,
                module.route_path
            );
        }
    }
}

#[test]
fn employee_full_route_sweep() {
    let session = session_with_role(Role::Employee);
    let rendered: Vec<ModuleId> = portal::registry::list_modules()
        .iter()
        .filter_map(|m| match resolve(&session, m.route_path) {
            RouteDecision::Render {
                view: PortalView::Module(id),
                ..
            } => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(
        rendered,
        vec![ModuleId::Kudos, ModuleId::Profile, ModuleId::Training]
    );
}

#[test]
fn near_miss_paths_are_not_found_rather_than_denied() {
    let session = session_with_role(Role::Employee);
    for path in ["/kudos/", "/Kudos", "/kudos/1", "/reports2"] {
        assert_eq!(resolve(&session, path), RouteDecision::NotFound, "{}", path);
    }
}

#[test]
fn decision_carries_the_session_identity_untouched() {
    let session = session_with_role(Role::ExecutiveBoard);
    let expected = session.identity().cloned().unwrap();
    match resolve(&session, "/reports") {
        RouteDecision::Render { identity, .. } => assert_eq!(identity, expected),
        other => panic!("expected render, got {:?}", other),
    }
}
