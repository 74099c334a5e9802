use dioxus::prelude::*;

/// A determinate progress bar. `percent` is clamped to 0–100.
#[component]
pub fn Progress(percent: u8) -> Element {
    let percent = percent.min(100);
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress", role: "progressbar",
            div {
                class: "progress-fill",
                style: "width: {percent}%",
            }
        }
    }
}
