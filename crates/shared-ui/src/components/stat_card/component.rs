use dioxus::prelude::*;

/// A gradient metric card: big value, small label, optional footnote.
/// `color` is one of the theme color tokens (blue, green, orange, purple,
/// red, yellow).
#[component]
pub fn StatCard(
    value: String,
    label: String,
    #[props(default)] footnote: String,
    #[props(default = "blue".to_string())] color: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card", "data-color": color,
            div { class: "stat-card-value", "{value}" }
            div { class: "stat-card-label", "{label}" }
            if !footnote.is_empty() {
                div { class: "stat-card-footnote", "{footnote}" }
            }
        }
    }
}
