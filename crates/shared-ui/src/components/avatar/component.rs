use dioxus::prelude::*;

/// Size variants for avatars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "sm",
            AvatarSize::Medium => "md",
            AvatarSize::Large => "lg",
        }
    }
}

/// A circular avatar rendering an opaque display token (emoji).
#[component]
pub fn Avatar(token: String, #[props(default)] size: AvatarSize) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "avatar",
            "data-size": size.class(),
            "{token}"
        }
    }
}
