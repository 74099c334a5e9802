use super::ModuleGate;
use crate::session::use_identity;
use dioxus::prelude::*;
use portal::directory;
use portal::ModuleId;
use shared_types::{TrainingStatus, User};
use shared_ui::{
    Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, Input, PageHeader, PageSubtitle, PageTitle, Separator, TabList, TabTrigger, Textarea,
};

/// Split a comma-separated input into trimmed, non-empty items.
fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_list(items: &[String]) -> String {
    items.join(", ")
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        ModuleGate { module: ModuleId::Profile,
            ProfileView {}
        }
    }
}

/// The viewer's own profile: read-only identity fields plus editable
/// extras. Saving keeps the edits in view-local state only.
#[component]
fn ProfileView() -> Element {
    let identity = use_identity();
    let viewer_id = identity.as_ref().map(|u| u.id).unwrap_or_default();
    let extras = use_signal(|| directory::profile_extras(viewer_id));
    let mut active_tab = use_signal(|| "about");

    // The gate only renders this with a live session.
    let Some(identity) = identity else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "profile-page",
            PageHeader {
                div {
                    PageTitle { "My Profile" }
                    PageSubtitle { "Manage your data and development path" }
                }
            }

            IdentityCard { identity: identity.clone() }

            TabList {
                TabTrigger {
                    active: active_tab() == "about",
                    onclick: move |_| active_tab.set("about"),
                    "About me"
                }
                TabTrigger {
                    active: active_tab() == "development",
                    onclick: move |_| active_tab.set("development"),
                    "Development"
                }
            }

            if active_tab() == "about" {
                ExtrasCard { extras }
            } else {
                DevelopmentCard { extras }
            }
        }
    }
}

#[component]
fn IdentityCard(identity: User) -> Element {
    rsx! {
        Card {
            CardContent { class: "profile-identity",
                Avatar { token: identity.avatar.clone(), size: AvatarSize::Large }
                div { class: "profile-identity-text",
                    h2 { "{identity.name}" }
                    span { class: "profile-identity-email", "{identity.email}" }
                    div { class: "profile-identity-badges",
                        Badge { variant: BadgeVariant::Primary, "{identity.role.label()}" }
                        Badge { variant: BadgeVariant::Secondary, "{identity.department.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ExtrasCard(extras: Signal<shared_types::ProfileExtras>) -> Element {
    let mut extras = extras;
    let mut editing = use_signal(|| false);
    let mut phone = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut interests = use_signal(String::new);
    let mut saved = use_signal(|| false);

    let start_editing = move |_| {
        let current = extras();
        phone.set(current.phone.clone());
        bio.set(current.bio.clone());
        skills.set(join_list(&current.skills));
        interests.set(join_list(&current.interests));
        saved.set(false);
        editing.set(true);
    };

    let save = move |_| {
        let mut updated = extras();
        updated.phone = phone().trim().to_string();
        updated.bio = bio().trim().to_string();
        updated.skills = parse_list(&skills());
        updated.interests = parse_list(&interests());
        tracing::info!(user_id = updated.user_id, "profile extras saved");
        extras.set(updated);
        editing.set(false);
        saved.set(true);
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "About me" }
            }
            CardContent {
                if saved() {
                    div { class: "profile-saved", "Profile updated." }
                }
                if editing() {
                    div { class: "profile-form",
                        Input {
                            label: "Phone".to_string(),
                            value: phone(),
                            on_input: move |evt: FormEvent| phone.set(evt.value()),
                        }
                        Textarea {
                            label: "Bio".to_string(),
                            value: bio(),
                            on_input: move |evt: FormEvent| bio.set(evt.value()),
                        }
                        Input {
                            label: "Skills (comma separated)".to_string(),
                            value: skills(),
                            on_input: move |evt: FormEvent| skills.set(evt.value()),
                        }
                        Input {
                            label: "Interests (comma separated)".to_string(),
                            value: interests(),
                            on_input: move |evt: FormEvent| interests.set(evt.value()),
                        }
                        div { class: "profile-form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: save,
                                "Save"
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| editing.set(false),
                                "Cancel"
                            }
                        }
                    }
                } else {
                    div { class: "profile-readout",
                        if !extras().phone.is_empty() {
                            p { class: "profile-field",
                                span { class: "profile-field-label", "Phone" }
                                "{extras().phone}"
                            }
                        }
                        if !extras().bio.is_empty() {
                            p { class: "profile-field",
                                span { class: "profile-field-label", "Bio" }
                                "{extras().bio}"
                            }
                        }
                        Separator {}
                        div { class: "profile-tags",
                            span { class: "profile-field-label", "Skills" }
                            for skill in extras().skills {
                                Badge { variant: BadgeVariant::Outline, "{skill}" }
                            }
                        }
                        div { class: "profile-tags",
                            span { class: "profile-field-label", "Interests" }
                            for interest in extras().interests {
                                Badge { variant: BadgeVariant::Secondary, "{interest}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: start_editing,
                            "Edit profile"
                        }
                    }
                }
            }
        }
    }
}

/// Read-only development view: current skills and interests, plus the
/// trainings already completed with their effectiveness scores.
#[component]
fn DevelopmentCard(extras: Signal<shared_types::ProfileExtras>) -> Element {
    let completed: Vec<shared_types::Training> = directory::trainings()
        .into_iter()
        .filter(|t| t.status == TrainingStatus::Completed)
        .collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Development path" }
            }
            CardContent {
                div { class: "profile-tags",
                    span { class: "profile-field-label", "Skills" }
                    for skill in extras().skills {
                        Badge { variant: BadgeVariant::Outline, "{skill}" }
                    }
                }
                div { class: "profile-tags",
                    span { class: "profile-field-label", "Interests" }
                    for interest in extras().interests {
                        Badge { variant: BadgeVariant::Secondary, "{interest}" }
                    }
                }
                Separator {}
                span { class: "profile-field-label", "Completed trainings" }
                if completed.is_empty() {
                    p { class: "profile-empty", "No completed trainings yet." }
                }
                for training in completed {
                    div { class: "profile-training-row",
                        span { "{training.title}" }
                        if let Some(score) = training.effectiveness {
                            Badge { variant: BadgeVariant::Success, "{score:.1} / 5.0" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_trims_and_drops_empties() {
        assert_eq!(
            parse_list("React, TypeScript ,, Docker "),
            vec!["React", "TypeScript", "Docker"]
        );
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ,").is_empty());
    }

    #[test]
    fn join_then_parse_is_stable() {
        let items = vec!["Leadership".to_string(), "Coaching".to_string()];
        assert_eq!(parse_list(&join_list(&items)), items);
    }
}
