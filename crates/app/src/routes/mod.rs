pub mod dashboard;
pub mod denied;
pub mod employees;
pub mod home;
pub mod initiatives;
pub mod kudos;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod reports;
pub mod training;

use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use portal::registry;
use portal::{ModuleId, RouteDecision};
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{Avatar, AvatarSize, Button, ButtonVariant};

use employees::Employees;
use home::Home;
use initiatives::Initiatives;
use kudos::Kudos;
use not_found::NotFound;
use profile::Profile;
use reports::Reports;
use training::Training;

/// Application routes. Paths mirror the module registry exactly; the
/// catch-all sits inside the layout so unknown paths still get the shell
/// treatment (or the login view when signed out).
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/kudos")]
    Kudos {},
    #[route("/employees")]
    Employees {},
    #[route("/profile")]
    Profile {},
    #[route("/initiatives")]
    Initiatives {},
    #[route("/training")]
    Training {},
    #[route("/reports")]
    Reports {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// The Route a module descriptor's path maps to.
pub fn route_for(module: ModuleId) -> Route {
    match module {
        ModuleId::Kudos => Route::Kudos {},
        ModuleId::Employees => Route::Employees {},
        ModuleId::Profile => Route::Profile {},
        ModuleId::Initiatives => Route::Initiatives {},
        ModuleId::Training => Route::Training {},
        ModuleId::Reports => Route::Reports {},
    }
}

/// Outer shell: brand bar, page title, user chip, theme toggle.
///
/// When the session is signed out every path renders the login view
/// full-screen, with no chrome. Everything else nests in the Outlet.
#[component]
fn AppShell() -> Element {
    let mut state = use_session();
    let route: Route = use_route();

    use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::Light),
    });

    if !state.is_authenticated() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./layout.css") }
            login::LoginScreen {}
        };
    }

    let identity = state.identity();

    let page_title = match &route {
        Route::Home {} => "Dashboard",
        Route::Kudos {} => "Kudos",
        Route::Employees {} => "Employees",
        Route::Profile {} => "My Profile",
        Route::Initiatives {} => "Initiative Program",
        Route::Training {} => "Training",
        Route::Reports {} => "Reports & Analytics",
        Route::NotFound { .. } => "Page Not Found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "shell-header",
            div { class: "shell-brand",
                Icon::<LdShield> { icon: LdShield, width: 22, height: 22 }
                span { class: "shell-brand-name", "TARCZA" }
                span { class: "shell-brand-sub", "HR Portal" }
            }
            div { class: "shell-title", "{page_title}" }
            div { class: "shell-actions",
                ThemeToggle {}
                if let Some(user) = identity {
                    div { class: "shell-user",
                        Avatar { token: user.avatar.clone(), size: AvatarSize::Small }
                        div { class: "shell-user-text",
                            span { class: "shell-user-name", "{user.name}" }
                            span { class: "shell-user-role", "{user.role.label()}" }
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        state.sign_out();
                        navigator().push(Route::Home {});
                    },
                    "Sign out"
                }
            }
        }

        main { class: "shell-main",
            if !matches!(route, Route::Home {}) {
                div { class: "shell-back",
                    Link { to: Route::Home {}, "Back to dashboard" }
                }
            }
            Outlet::<Route> {}
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme_state = use_context::<ThemeState>();
    let mode = *theme_state.mode.read();
    let label = match mode {
        ThemeMode::Light => "Dark",
        ThemeMode::Dark => "Light",
    };
    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            onclick: move |_| {
                let next = theme_state.mode.read().toggled();
                theme_state.mode.set(next);
                theme_state.apply();
            },
            "{label}"
        }
    }
}

/// Guards a module view behind the route composer. The decision is
/// recomputed from session state on every render, so a role change or
/// sign-out immediately swaps the content.
#[component]
pub fn ModuleGate(module: ModuleId, children: Element) -> Element {
    let state = use_session();
    let session = state.session.read();
    let path = registry::descriptor(module).route_path;
    match portal::resolve(&session, path) {
        RouteDecision::Login => rsx! { login::LoginScreen {} },
        RouteDecision::AccessDenied { fallback_path } => rsx! {
            denied::AccessDeniedView { fallback_path: fallback_path.to_string() }
        },
        RouteDecision::Render { .. } => rsx! { {children} },
        RouteDecision::NotFound => rsx! { not_found::NotFoundView {} },
    }
}
