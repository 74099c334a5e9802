use super::Route;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent};

/// Catch-all route component.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        NotFoundView { path }
    }
}

/// Shown when a path matches no module route.
#[component]
pub fn NotFoundView(#[props(default)] path: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            Card { class: "not-found-card",
                CardContent {
                    h2 { "Page not found" }
                    if !path.is_empty() {
                        p { class: "not-found-path", "{path}" }
                    }
                    p { class: "not-found-text",
                        "The address does not match any portal module."
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::Home {});
                        },
                        "Back to dashboard"
                    }
                }
            }
        }
    }
}
