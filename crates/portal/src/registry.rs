use crate::policy;
use shared_types::Role;

/// The six feature modules reachable by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleId {
    Kudos,
    Employees,
    Profile,
    Initiatives,
    Training,
    Reports,
}

impl ModuleId {
    pub const ALL: [ModuleId; 6] = [
        ModuleId::Kudos,
        ModuleId::Employees,
        ModuleId::Profile,
        ModuleId::Initiatives,
        ModuleId::Training,
        ModuleId::Reports,
    ];
}

/// Static description of one module: route, display metadata, and the
/// badge shown on its dashboard card. Icon and color are opaque tokens the
/// presentation layer maps to real assets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleDescriptor {
    pub id: ModuleId,
    pub route_path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub badge_count: Option<u32>,
}

/// The registry, in dashboard display order. Order affects display only,
/// never access semantics.
const MODULES: [ModuleDescriptor; 6] = [
    ModuleDescriptor {
        id: ModuleId::Kudos,
        route_path: "/kudos",
        title: "Kudos",
        description: "Recognize colleagues for acting on company values",
        icon: "award",
        color: "orange",
        badge_count: Some(3),
    },
    ModuleDescriptor {
        id: ModuleId::Profile,
        route_path: "/profile",
        title: "My Profile",
        description: "Manage your data and development path",
        icon: "user",
        color: "blue",
        badge_count: None,
    },
    ModuleDescriptor {
        id: ModuleId::Training,
        route_path: "/training",
        title: "Training",
        description: "Manage trainings and competence development",
        icon: "book",
        color: "purple",
        badge_count: Some(2),
    },
    ModuleDescriptor {
        id: ModuleId::Employees,
        route_path: "/employees",
        title: "Employees",
        description: "Manage employee records and profiles",
        icon: "users",
        color: "green",
        badge_count: None,
    },
    ModuleDescriptor {
        id: ModuleId::Initiatives,
        route_path: "/initiatives",
        title: "Initiative Program",
        description: "Manage employee improvement initiatives",
        icon: "lightbulb",
        color: "yellow",
        badge_count: Some(5),
    },
    ModuleDescriptor {
        id: ModuleId::Reports,
        route_path: "/reports",
        title: "Reports & Analytics",
        description: "Strategic HR reports and indicators",
        icon: "chart",
        color: "red",
        badge_count: None,
    },
];

/// All modules in display order.
pub fn list_modules() -> &'static [ModuleDescriptor] {
    &MODULES
}

/// Look up a module by its exact route path. `None` is the 404 case,
/// distinct from an access denial on a known route.
pub fn find_module_by_route(path: &str) -> Option<&'static ModuleDescriptor> {
    MODULES.iter().find(|m| m.route_path == path)
}

/// Descriptor for a known module id.
pub fn descriptor(id: ModuleId) -> &'static ModuleDescriptor {
    MODULES
        .iter()
        .find(|m| m.id == id)
        .unwrap_or(&MODULES[0]) // unreachable: every id appears in MODULES
}

/// Registry order filtered down to what the role may see. Drives the
/// dashboard card grid.
pub fn visible_modules(role: Role) -> Vec<&'static ModuleDescriptor> {
    MODULES
        .iter()
        .filter(|m| policy::is_module_visible(role, m.id))
        .collect()
}
