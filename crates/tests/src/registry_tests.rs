use portal::registry::{descriptor, find_module_by_route, list_modules, visible_modules};
use portal::ModuleId;
use pretty_assertions::assert_eq;
use shared_types::Role;

#[test]
fn registry_covers_all_six_modules_once() {
    let modules = list_modules();
    assert_eq!(modules.len(), 6);
    for id in ModuleId::ALL {
        assert_eq!(modules.iter().filter(|m| m.id == id).count(), 1);
    }
}

#[test]
fn route_paths_are_unique_and_absolute() {
    let modules = list_modules();
    for module in modules {
        assert!(module.route_path.starts_with('/'));
        assert_eq!(
            modules
                .iter()
                .filter(|m| m.route_path == module.route_path)
                .count(),
            1
        );
    }
}

#[test]
fn descriptor_lookup_matches_route_lookup() {
    for id in ModuleId::ALL {
        let d = descriptor(id);
        assert_eq!(find_module_by_route(d.route_path).map(|m| m.id), Some(id));
    }
}

#[test]
fn badge_counts_match_the_fixed_samples() {
    assert_eq!(descriptor(ModuleId::Kudos).badge_count, Some(3));
    assert_eq!(descriptor(ModuleId::Training).badge_count, Some(2));
    assert_eq!(descriptor(ModuleId::Initiatives).badge_count, Some(5));
    assert_eq!(descriptor(ModuleId::Profile).badge_count, None);
    assert_eq!(descriptor(ModuleId::Employees).badge_count, None);
    assert_eq!(descriptor(ModuleId::Reports).badge_count, None);
}

#[test]
fn visible_modules_preserve_registry_order() {
    let order: Vec<ModuleId> = list_modules().iter().map(|m| m.id).collect();
    for role in Role::ALL {
        let visible: Vec<ModuleId> = visible_modules(role).iter().map(|m| m.id).collect();
        let mut last_index = 0;
        for id in &visible {
            let index = order.iter().position(|o| o == id).unwrap();
            assert!(index >= last_index, "order broken for {:?}", role);
            last_index = index;
        }
    }
}

#[test]
fn visible_module_counts_per_role() {
    assert_eq!(visible_modules(Role::Employee).len(), 3);
    assert_eq!(visible_modules(Role::TeamLead).len(), 3);
    assert_eq!(visible_modules(Role::HrCoordinator).len(), 4);
    assert_eq!(visible_modules(Role::SystemAdmin).len(), 4);
    assert_eq!(visible_modules(Role::InitiativeCoordinator).len(), 4);
    assert_eq!(visible_modules(Role::ExecutiveBoard).len(), 6);
}
