use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent};

/// Shown when a known route is outside the signed-in role's allowed set.
/// The button leads back to the composer-provided fallback path.
#[component]
pub fn AccessDeniedView(fallback_path: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./denied.css") }

        div { class: "denied-page",
            Card { class: "denied-card",
                CardContent {
                    div { class: "denied-icon",
                        Icon::<LdShield> { icon: LdShield, width: 40, height: 40 }
                    }
                    h2 { "Access denied" }
                    p { class: "denied-text",
                        "Your role does not include this module. If you believe this is a mistake, contact your HR coordinator."
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(fallback_path.clone());
                        },
                        "Back to dashboard"
                    }
                }
            }
        }
    }
}
