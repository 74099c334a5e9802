//! Centralized access policy.
//!
//! One rule table consumed by the router guard and, redundantly, by module
//! views for their finer-grained actions. Pure functions of (role, module);
//! no hidden state.

use crate::registry::{self, ModuleId};
use shared_types::Role;

/// Roles allowed to open a module. The three base modules are visible to
/// every authenticated role.
pub fn allowed_roles(module: ModuleId) -> &'static [Role] {
    match module {
        ModuleId::Kudos | ModuleId::Profile | ModuleId::Training => &Role::ALL,
        ModuleId::Employees => &[Role::HrCoordinator, Role::SystemAdmin, Role::ExecutiveBoard],
        ModuleId::Initiatives => &[Role::InitiativeCoordinator, Role::ExecutiveBoard],
        ModuleId::Reports => &[Role::ExecutiveBoard],
    }
}

/// Whether a role may see (and open) a module.
pub fn is_module_visible(role: Role, module: ModuleId) -> bool {
    allowed_roles(module).contains(&role)
}

/// Whether a role may open the module registered at `path`. Unknown paths
/// are never allowed; the composer reports them as not-found separately.
pub fn is_route_allowed(role: Role, path: &str) -> bool {
    registry::find_module_by_route(path)
        .map(|m| is_module_visible(role, m.id))
        .unwrap_or(false)
}

/// In-module action: manage employee records (same set that sees the
/// employee directory).
pub fn can_manage_employees(role: Role) -> bool {
    is_module_visible(role, ModuleId::Employees)
}

/// In-module action: change an initiative's status.
pub fn can_review_initiatives(role: Role) -> bool {
    is_module_visible(role, ModuleId::Initiatives)
}

/// In-module action: approve or reject training applications.
pub fn can_review_applications(role: Role) -> bool {
    matches!(
        role,
        Role::TeamLead | Role::HrCoordinator | Role::ExecutiveBoard
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // The full 6x6 visibility table from the access policy, row per role.
    const TABLE: [(Role, [bool; 6]); 6] = [
        // [Kudos, Employees, Profile, Initiatives, Training, Reports]
        (Role::Employee, [true, false, true, false, true, false]),
        (Role::TeamLead, [true, false, true, false, true, false]),
        (Role::HrCoordinator, [true, true, true, false, true, false]),
        (Role::SystemAdmin, [true, true, true, false, true, false]),
        (
            Role::InitiativeCoordinator,
            [true, false, true, true, true, false],
        ),
        (Role::ExecutiveBoard, [true, true, true, true, true, true]),
    ];

    const COLUMNS: [ModuleId; 6] = [
        ModuleId::Kudos,
        ModuleId::Employees,
        ModuleId::Profile,
        ModuleId::Initiatives,
        ModuleId::Training,
        ModuleId::Reports,
    ];

    #[test]
    fn visibility_matches_table_for_all_36_cases() {
        for (role, row) in TABLE {
            for (module, expected) in COLUMNS.iter().zip(row) {
                assert_eq!(
                    is_module_visible(role, *module),
                    expected,
                    "role {:?} module {:?}",
                    role,
                    module
                );
            }
        }
    }

    #[test]
    fn route_allowance_follows_visibility() {
        for (role, _) in TABLE {
            for module in COLUMNS {
                let path = registry::descriptor(module).route_path;
                assert_eq!(is_route_allowed(role, path), is_module_visible(role, module));
            }
        }
    }

    #[test]
    fn unknown_route_is_never_allowed() {
        for role in Role::ALL {
            assert!(!is_route_allowed(role, "/unknown-module"));
            assert!(!is_route_allowed(role, ""));
        }
    }

    #[test]
    fn application_review_is_leads_hr_and_board() {
        assert!(can_review_applications(Role::TeamLead));
        assert!(can_review_applications(Role::HrCoordinator));
        assert!(can_review_applications(Role::ExecutiveBoard));
        assert!(!can_review_applications(Role::Employee));
        assert!(!can_review_applications(Role::SystemAdmin));
        assert!(!can_review_applications(Role::InitiativeCoordinator));
    }

    #[test]
    fn policy_is_deterministic() {
        for _ in 0..3 {
            assert!(is_module_visible(Role::ExecutiveBoard, ModuleId::Reports));
            assert!(!is_module_visible(Role::Employee, ModuleId::Reports));
        }
    }
}
