use dioxus::prelude::*;

/// Container for a controlled tab strip. The owning view holds the active
/// tab key and switches its own content; the strip only renders triggers.
#[component]
pub fn TabList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-list", role: "tablist",
            {children}
        }
    }
}

/// One tab trigger. `active` styles the selected tab.
#[component]
pub fn TabTrigger(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "tab-trigger",
            role: "tab",
            "data-active": active,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
