use portal::{policy, ModuleId};
use pretty_assertions::assert_eq;
use shared_types::Role;

#[test]
fn base_modules_are_open_to_every_role() {
    for role in Role::ALL {
        for module in [ModuleId::Kudos, ModuleId::Profile, ModuleId::Training] {
            assert!(
                policy::is_module_visible(role, module),
                "{:?} should see {:?}",
                role,
                module
            );
        }
    }
}

#[test]
fn employees_module_is_limited_to_hr_admin_and_board() {
    let allowed = [Role::HrCoordinator, Role::SystemAdmin, Role::ExecutiveBoard];
    for role in Role::ALL {
        assert_eq!(
            policy::is_module_visible(role, ModuleId::Employees),
            allowed.contains(&role),
            "{:?}",
            role
        );
    }
}

#[test]
fn initiatives_module_is_limited_to_coordinator_and_board() {
    let allowed = [Role::InitiativeCoordinator, Role::ExecutiveBoard];
    for role in Role::ALL {
        assert_eq!(
            policy::is_module_visible(role, ModuleId::Initiatives),
            allowed.contains(&role),
            "{:?}",
            role
        );
    }
}

#[test]
fn reports_module_is_board_only() {
    for role in Role::ALL {
        assert_eq!(
            policy::is_module_visible(role, ModuleId::Reports),
            role == Role::ExecutiveBoard,
            "{:?}",
            role
        );
    }
}

#[test]
fn allowed_roles_and_visibility_agree() {
    for module in ModuleId::ALL {
        let allowed = policy::allowed_roles(module);
        for role in Role::ALL {
            assert_eq!(
                allowed.contains(&role),
                policy::is_module_visible(role, module)
            );
        }
    }
}

#[test]
fn route_check_follows_the_registry() {
    assert!(policy::is_route_allowed(Role::Employee, "/kudos"));
    assert!(!policy::is_route_allowed(Role::Employee, "/reports"));
    assert!(policy::is_route_allowed(Role::ExecutiveBoard, "/reports"));
}

#[test]
fn unknown_routes_are_never_allowed() {
    for role in Role::ALL {
        assert!(!policy::is_route_allowed(role, "/secret"));
        assert!(!policy::is_route_allowed(role, ""));
    }
}

#[test]
fn capability_helpers_match_their_role_sets() {
    assert!(policy::can_manage_employees(Role::HrCoordinator));
    assert!(policy::can_manage_employees(Role::SystemAdmin));
    assert!(!policy::can_manage_employees(Role::Employee));

    assert!(policy::can_review_initiatives(Role::InitiativeCoordinator));
    assert!(!policy::can_review_initiatives(Role::TeamLead));

    assert!(policy::can_review_applications(Role::TeamLead));
    assert!(policy::can_review_applications(Role::HrCoordinator));
    assert!(!policy::can_review_applications(Role::Employee));
}
