use dioxus::prelude::*;

/// A thin horizontal rule between sections.
#[component]
pub fn Separator() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "separator", role: "separator" }
    }
}
