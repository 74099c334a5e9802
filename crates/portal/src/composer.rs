//! View composition: (session, requested path) -> exactly one decision.
//!
//! Pure and side-effect free: resolving never mutates the session, and the
//! same inputs always produce the same decision. All three "failure"
//! outcomes are ordinary variants with dedicated views, not errors.

use crate::registry::{self, ModuleId};
use crate::session::Session;
use crate::policy;
use shared_types::User;

/// Root path, also the access-denied fallback target.
pub const ROOT_PATH: &str = "/";

/// What the shell renders when a route resolves to content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalView {
    /// The module card grid at `/`.
    Dashboard,
    Module(ModuleId),
}

/// Outcome of composing a view for a requested path.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    /// No session: every path shows the login view.
    Login,
    /// Known route, role not in the module's allowed set.
    AccessDenied { fallback_path: &'static str },
    /// Render the view with the identity passed down read-only.
    Render { view: PortalView, identity: User },
    /// The path matches no registry entry.
    NotFound,
}

/// Resolve a requested path against the session.
pub fn resolve(session: &Session, path: &str) -> RouteDecision {
    let Some(identity) = session.identity() else {
        return RouteDecision::Login;
    };

    if path == ROOT_PATH {
        return RouteDecision::Render {
            view: PortalView::Dashboard,
            identity: identity.clone(),
        };
    }

    let Some(module) = registry::find_module_by_route(path) else {
        return RouteDecision::NotFound;
    };

    if !policy::is_module_visible(identity.role, module.id) {
        tracing::info!(
            role = identity.role.as_str(),
            path,
            "access denied by module policy"
        );
        return RouteDecision::AccessDenied {
            fallback_path: ROOT_PATH,
        };
    }

    RouteDecision::Render {
        view: PortalView::Module(module.id),
        identity: identity.clone(),
    }
}
