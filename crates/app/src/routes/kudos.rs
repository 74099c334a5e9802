use super::ModuleGate;
use crate::session::use_identity;
use dioxus::prelude::*;
use portal::directory;
use portal::ModuleId;
use shared_types::{AppError, KudosEntry, KudosVisibility};
use shared_ui::{
    Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, FormSelect, PageHeader, PageSubtitle, PageTitle, TabList, TabTrigger, Textarea,
};
use std::collections::HashMap;

/// Validate a kudos submission. Field errors are keyed by form field name.
fn validate_kudos(recipient: &str, value: &str, reason: &str) -> Result<(), AppError> {
    let mut fields = HashMap::new();
    if recipient.is_empty() {
        fields.insert("recipient".to_string(), "Select a recipient".to_string());
    }
    if value.is_empty() {
        fields.insert("value".to_string(), "Select a company value".to_string());
    }
    if reason.trim().is_empty() {
        fields.insert("reason".to_string(), "Describe the reason".to_string());
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Complete the highlighted fields", fields))
    }
}

/// Kudos counts per company value, most recognized first. Values with no
/// entries are omitted.
fn value_counts(entries: &[KudosEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(value, _)| *value == entry.value) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.value.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Public entries plus private ones addressed to or given by the viewer.
fn visible_entries(entries: Vec<KudosEntry>, viewer: &str) -> Vec<KudosEntry> {
    entries
        .into_iter()
        .filter(|e| {
            e.visibility == KudosVisibility::Public || e.giver == viewer || e.recipient == viewer
        })
        .collect()
}

#[component]
pub fn Kudos() -> Element {
    rsx! {
        ModuleGate { module: ModuleId::Kudos,
            KudosView {}
        }
    }
}

/// Kudos module: a recognition feed and a give-kudos form. Submitting
/// only logs and resets the form; the feed itself is a fixed sample.
#[component]
fn KudosView() -> Element {
    let identity = use_identity();
    let viewer = identity.map(|u| u.name).unwrap_or_default();

    let mut active_tab = use_signal(|| "feed");

    let mut recipient = use_signal(String::new);
    let mut value = use_signal(String::new);
    let mut reason = use_signal(String::new);
    let mut visibility = use_signal(|| KudosVisibility::Public);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitted = use_signal(|| false);

    let entries = visible_entries(directory::kudos_entries(), &viewer);

    let viewer_for_submit = viewer.clone();
    let submit = move |_| {
        submitted.set(false);
        match validate_kudos(&recipient(), &value(), &reason()) {
            Ok(()) => {
                tracing::info!(
                    giver = %viewer_for_submit,
                    recipient = %recipient(),
                    value = %value(),
                    visibility = visibility().label(),
                    "kudos submitted"
                );
                recipient.set(String::new());
                value.set(String::new());
                reason.set(String::new());
                visibility.set(KudosVisibility::Public);
                field_errors.set(HashMap::new());
                submitted.set(true);
            }
            Err(err) => field_errors.set(err.field_errors),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./kudos.css") }

        div { class: "kudos-page",
            PageHeader {
                div {
                    PageTitle { "Kudos" }
                    PageSubtitle { "Recognize colleagues for acting on company values" }
                }
            }

            TabList {
                TabTrigger {
                    active: active_tab() == "feed",
                    onclick: move |_| active_tab.set("feed"),
                    "Recognition feed"
                }
                TabTrigger {
                    active: active_tab() == "give",
                    onclick: move |_| active_tab.set("give"),
                    "Give kudos"
                }
                TabTrigger {
                    active: active_tab() == "stats",
                    onclick: move |_| active_tab.set("stats"),
                    "Stats"
                }
            }

            if active_tab() == "feed" {
                div { class: "kudos-feed",
                    for entry in entries {
                        KudosCard { entry }
                    }
                }
            } else if active_tab() == "stats" {
                KudosStats {}
            } else {
                Card {
                    CardHeader {
                        CardTitle { "Give kudos" }
                    }
                    CardContent {
                        if submitted() {
                            div { class: "kudos-success", "Kudos sent. Thank you for the recognition!" }
                        }
                        div { class: "kudos-form",
                            FormSelect {
                                label: "Recipient".to_string(),
                                value: recipient(),
                                invalid: field_errors().contains_key("recipient"),
                                onchange: move |evt: Event<FormData>| recipient.set(evt.value()),
                                option { value: "", "Select a colleague..." }
                                for user in directory::users().into_iter().filter(|u| u.name != viewer) {
                                    option { value: "{user.name}", "{user.name}" }
                                }
                            }
                            if let Some(msg) = field_errors().get("recipient") {
                                span { class: "kudos-field-error", "{msg}" }
                            }

                            FormSelect {
                                label: "Company value".to_string(),
                                value: value(),
                                invalid: field_errors().contains_key("value"),
                                onchange: move |evt: Event<FormData>| value.set(evt.value()),
                                option { value: "", "Select a value..." }
                                for company_value in directory::company_values() {
                                    option { value: "{company_value}", "{company_value}" }
                                }
                            }
                            if let Some(msg) = field_errors().get("value") {
                                span { class: "kudos-field-error", "{msg}" }
                            }

                            Textarea {
                                label: "Reason".to_string(),
                                value: reason(),
                                placeholder: "What did they do?".to_string(),
                                on_input: move |evt: FormEvent| reason.set(evt.value()),
                            }
                            if let Some(msg) = field_errors().get("reason") {
                                span { class: "kudos-field-error", "{msg}" }
                            }

                            FormSelect {
                                label: "Visibility".to_string(),
                                value: visibility().label().to_string(),
                                onchange: move |evt: Event<FormData>| {
                                    let next = if evt.value() == "Private" {
                                        KudosVisibility::Private
                                    } else {
                                        KudosVisibility::Public
                                    };
                                    visibility.set(next);
                                },
                                option { value: "Public", "Public" }
                                option { value: "Private", "Private" }
                            }

                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: submit,
                                "Send kudos"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn KudosStats() -> Element {
    let entries = directory::kudos_entries();
    let total = entries.len();
    let counts = value_counts(&entries);
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Recognition by value" }
            }
            CardContent {
                p { class: "kudos-stats-total", "{total} kudos in the feed" }
                for (value, count) in counts {
                    div { class: "kudos-stats-row",
                        Badge { variant: BadgeVariant::Primary, "{value}" }
                        span { class: "kudos-stats-count", "{count}" }
                    }
                }
            }
        }
    }
}

#[component]
fn KudosCard(entry: KudosEntry) -> Element {
    rsx! {
        Card { class: "kudos-card",
            CardContent {
                div { class: "kudos-card-people",
                    Avatar { token: entry.giver_avatar.clone(), size: AvatarSize::Small }
                    span { class: "kudos-card-names",
                        strong { "{entry.giver}" }
                        " recognized "
                        strong { "{entry.recipient}" }
                    }
                    Avatar { token: entry.recipient_avatar.clone(), size: AvatarSize::Small }
                }
                p { class: "kudos-card-reason", "\"{entry.reason}\"" }
                div { class: "kudos-card-meta",
                    Badge { variant: BadgeVariant::Primary, "{entry.value}" }
                    if entry.visibility == KudosVisibility::Private {
                        Badge { variant: BadgeVariant::Outline, "Private" }
                    }
                    span { class: "kudos-card-date", "{entry.date}" }
                }
            }
        }
    }
}
