use super::route_for;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdFileText, LdFolder, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use portal::registry::{visible_modules, ModuleDescriptor};
use shared_types::{FeatureFlags, User};
use shared_ui::{Card, CountBadge, StatCard};

/// Resolve a registry icon token to a rendered icon.
fn module_icon(token: &str) -> Element {
    match token {
        "award" => rsx! { Icon::<LdShield> { icon: LdShield, width: 28, height: 28 } },
        "user" => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 28, height: 28 } },
        "book" => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 28, height: 28 } },
        "users" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 28, height: 28 } },
        "lightbulb" => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 28, height: 28 } },
        "chart" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 28, height: 28 } },
        _ => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 28, height: 28 } },
    }
}

/// Dashboard: greeting, optional quick stats, and the module card grid
/// filtered down to what the signed-in role may open.
#[component]
pub fn DashboardView(identity: User) -> Element {
    let flags: FeatureFlags = use_context();
    let modules = visible_modules(identity.role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            div { class: "dashboard-greeting",
                h1 { "Hello, {identity.first_name()}!" }
                p { "{identity.role.label()} · {identity.department.label()}" }
            }

            if flags.quick_stats {
                QuickStats {}
            }

            div { class: "dashboard-grid",
                for descriptor in modules {
                    ModuleCard {
                        descriptor: *descriptor,
                        show_badge: flags.module_badges,
                    }
                }
            }
        }
    }
}

#[component]
fn QuickStats() -> Element {
    let metrics = portal::directory::hr_metrics();
    rsx! {
        div { class: "dashboard-stats",
            StatCard {
                value: metrics.kudos_given.to_string(),
                label: "Kudos given".to_string(),
                color: "orange".to_string(),
            }
            StatCard {
                value: metrics.trainings_completed.to_string(),
                label: "Trainings completed".to_string(),
                color: "purple".to_string(),
            }
            StatCard {
                value: format!("{:.1}%", metrics.retention),
                label: "Retention".to_string(),
                color: "green".to_string(),
            }
            StatCard {
                value: format!("{:.1}", metrics.satisfaction),
                label: "Satisfaction".to_string(),
                color: "blue".to_string(),
            }
        }
    }
}

/// One clickable module tile. The grid only ever contains modules the
/// role may open, so navigation from here cannot hit the denied view.
#[component]
fn ModuleCard(descriptor: ModuleDescriptor, show_badge: bool) -> Element {
    let target = route_for(descriptor.id);
    rsx! {
        div {
            class: "module-card-wrapper",
            onclick: move |_| {
                navigator().push(target.clone());
            },
            Card { class: "module-card",
                div { class: "module-card-top",
                    span { class: "module-card-icon", "data-color": descriptor.color,
                        {module_icon(descriptor.icon)}
                    }
                    if show_badge {
                        if let Some(count) = descriptor.badge_count {
                            CountBadge { count }
                        }
                    }
                }
                h3 { class: "module-card-title", "{descriptor.title}" }
                p { class: "module-card-description", "{descriptor.description}" }
            }
        }
    }
}
