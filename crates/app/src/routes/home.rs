use crate::session::use_session;
use dioxus::prelude::*;
use portal::composer::ROOT_PATH;
use portal::{PortalView, RouteDecision};

use super::{dashboard, login};

/// The root route: dashboard when signed in, login otherwise.
#[component]
pub fn Home() -> Element {
    let state = use_session();
    let session = state.session.read();
    match portal::resolve(&session, ROOT_PATH) {
        RouteDecision::Render {
            view: PortalView::Dashboard,
            identity,
        } => rsx! { dashboard::DashboardView { identity } },
        _ => rsx! { login::LoginScreen {} },
    }
}
