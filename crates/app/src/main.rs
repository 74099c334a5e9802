use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod config;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Feature flags come from the embedded config and never change at runtime
    let flags: FeatureFlags = use_hook(|| config::load().features);
    use_context_provider(|| flags);

    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
