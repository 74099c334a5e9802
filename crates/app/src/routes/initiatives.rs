use super::ModuleGate;
use crate::session::use_role;
use dioxus::prelude::*;
use portal::directory;
use portal::{policy, ModuleId};
use shared_types::{
    AppError, ImpactLevel, Initiative, InitiativeCategory, InitiativeStatus,
};
use shared_ui::{
    Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, FormSelect, Input, PageHeader, PageSubtitle, PageTitle, TabList, TabTrigger,
    Textarea,
};
use std::collections::HashMap;

/// Validate an initiative submission.
fn validate_initiative(title: &str, description: &str, solution: &str) -> Result<(), AppError> {
    let mut fields = HashMap::new();
    if title.trim().is_empty() {
        fields.insert("title".to_string(), "Give the initiative a title".to_string());
    }
    if description.trim().is_empty() {
        fields.insert(
            "description".to_string(),
            "Describe the problem".to_string(),
        );
    }
    if solution.trim().is_empty() {
        fields.insert(
            "solution".to_string(),
            "Propose a solution".to_string(),
        );
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Complete the highlighted fields", fields))
    }
}

/// Status filter; `None` keeps everything.
fn filter_initiatives(
    initiatives: Vec<Initiative>,
    status: Option<InitiativeStatus>,
) -> Vec<Initiative> {
    initiatives
        .into_iter()
        .filter(|i| status.map(|wanted| i.status == wanted).unwrap_or(true))
        .collect()
}

fn parse_status_filter(value: &str) -> Option<InitiativeStatus> {
    InitiativeStatus::ALL.into_iter().find(|s| s.label() == value)
}

fn parse_category(value: &str) -> InitiativeCategory {
    InitiativeCategory::ALL
        .into_iter()
        .find(|c| c.label() == value)
        .unwrap_or(InitiativeCategory::Other)
}

fn parse_impact(value: &str) -> ImpactLevel {
    ImpactLevel::ALL
        .into_iter()
        .find(|i| i.label() == value)
        .unwrap_or(ImpactLevel::Medium)
}

/// Review transitions available from a status, as (next status, button
/// label). Statuses past review offer no actions.
fn review_actions(status: InitiativeStatus) -> &'static [(InitiativeStatus, &'static str)] {
    match status {
        InitiativeStatus::New => &[(InitiativeStatus::UnderReview, "Take under review")],
        InitiativeStatus::UnderReview => &[
            (InitiativeStatus::Accepted, "Accept"),
            (InitiativeStatus::Rejected, "Reject"),
        ],
        _ => &[],
    }
}

/// Initiative counts per status, in the fixed status order. Statuses with
/// no initiatives are kept at zero so the stats view stays stable.
fn status_counts(initiatives: &[Initiative]) -> Vec<(InitiativeStatus, usize)> {
    InitiativeStatus::ALL
        .into_iter()
        .map(|status| {
            let count = initiatives.iter().filter(|i| i.status == status).count();
            (status, count)
        })
        .collect()
}

fn status_badge_variant(status: InitiativeStatus) -> BadgeVariant {
    match status {
        InitiativeStatus::New => BadgeVariant::Primary,
        InitiativeStatus::UnderReview => BadgeVariant::Outline,
        InitiativeStatus::Accepted | InitiativeStatus::Completed => BadgeVariant::Success,
        InitiativeStatus::InProgress => BadgeVariant::Secondary,
        InitiativeStatus::Rejected => BadgeVariant::Destructive,
    }
}

#[component]
pub fn Initiatives() -> Element {
    rsx! {
        ModuleGate { module: ModuleId::Initiatives,
            InitiativesView {}
        }
    }
}

/// Initiative program: browse submitted improvement ideas and submit new
/// ones. Review controls appear only for roles the policy allows.
#[component]
fn InitiativesView() -> Element {
    let role = use_role();
    let reviewer = policy::can_review_initiatives(role);

    let mut active_tab = use_signal(|| "browse");
    let mut status_filter = use_signal(|| Option::<InitiativeStatus>::None);
    let mut items = use_signal(directory::initiatives);

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut solution = use_signal(String::new);
    let mut category = use_signal(|| InitiativeCategory::ProcessImprovement);
    let mut impact = use_signal(|| ImpactLevel::Medium);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitted = use_signal(|| false);

    let rows = filter_initiatives(items(), status_filter());
    let counts = status_counts(&items());
    let total = items().len();

    // Review decisions live in view state; a reload restores the samples.
    let on_review = move |(id, next): (i64, InitiativeStatus)| {
        tracing::info!(initiative_id = id, status = next.label(), "initiative status changed");
        let mut list = items.write();
        if let Some(item) = list.iter_mut().find(|i| i.id == id) {
            item.status = next;
        }
    };

    let submit = move |_| {
        submitted.set(false);
        match validate_initiative(&title(), &description(), &solution()) {
            Ok(()) => {
                tracing::info!(
                    title = %title(),
                    category = category().label(),
                    impact = impact().label(),
                    "initiative submitted"
                );
                title.set(String::new());
                description.set(String::new());
                solution.set(String::new());
                category.set(InitiativeCategory::ProcessImprovement);
                impact.set(ImpactLevel::Medium);
                field_errors.set(HashMap::new());
                submitted.set(true);
            }
            Err(err) => field_errors.set(err.field_errors),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./initiatives.css") }

        div { class: "initiatives-page",
            PageHeader {
                div {
                    PageTitle { "Initiative Program" }
                    PageSubtitle { "Manage employee improvement initiatives" }
                }
            }

            TabList {
                TabTrigger {
                    active: active_tab() == "browse",
                    onclick: move |_| active_tab.set("browse"),
                    "Browse"
                }
                TabTrigger {
                    active: active_tab() == "submit",
                    onclick: move |_| active_tab.set("submit"),
                    "Submit an idea"
                }
                TabTrigger {
                    active: active_tab() == "stats",
                    onclick: move |_| active_tab.set("stats"),
                    "Stats"
                }
            }

            if active_tab() == "browse" {
                FormSelect {
                    label: "Status".to_string(),
                    value: status_filter().map(|s| s.label().to_string()).unwrap_or_default(),
                    onchange: move |evt: Event<FormData>| {
                        status_filter.set(parse_status_filter(&evt.value()));
                    },
                    option { value: "", "All statuses" }
                    for status in InitiativeStatus::ALL {
                        option { value: "{status.label()}", "{status.label()}" }
                    }
                }
                div { class: "initiatives-list",
                    for initiative in rows {
                        InitiativeCard { initiative, reviewer, on_review }
                    }
                }
            } else if active_tab() == "stats" {
                Card {
                    CardHeader {
                        CardTitle { "Initiatives by status" }
                    }
                    CardContent {
                        p { class: "initiatives-stats-total", "{total} initiatives submitted" }
                        for (status, count) in counts {
                            div { class: "initiatives-stats-row",
                                Badge { variant: status_badge_variant(status), "{status.label()}" }
                                span { class: "initiatives-stats-count", "{count}" }
                            }
                        }
                    }
                }
            } else {
                Card {
                    CardHeader {
                        CardTitle { "Submit an initiative" }
                    }
                    CardContent {
                        if submitted() {
                            div { class: "initiatives-success",
                                "Thank you! Your initiative was forwarded to the coordinators."
                            }
                        }
                        div { class: "initiatives-form",
                            Input {
                                label: "Title".to_string(),
                                value: title(),
                                on_input: move |evt: FormEvent| title.set(evt.value()),
                            }
                            if let Some(msg) = field_errors().get("title") {
                                span { class: "initiatives-field-error", "{msg}" }
                            }
                            Textarea {
                                label: "Problem".to_string(),
                                placeholder: "What needs improving?".to_string(),
                                value: description(),
                                on_input: move |evt: FormEvent| description.set(evt.value()),
                            }
                            if let Some(msg) = field_errors().get("description") {
                                span { class: "initiatives-field-error", "{msg}" }
                            }
                            Textarea {
                                label: "Proposed solution".to_string(),
                                value: solution(),
                                on_input: move |evt: FormEvent| solution.set(evt.value()),
                            }
                            if let Some(msg) = field_errors().get("solution") {
                                span { class: "initiatives-field-error", "{msg}" }
                            }
                            FormSelect {
                                label: "Category".to_string(),
                                value: category().label().to_string(),
                                onchange: move |evt: Event<FormData>| {
                                    category.set(parse_category(&evt.value()));
                                },
                                for option_value in InitiativeCategory::ALL {
                                    option { value: "{option_value.label()}", "{option_value.label()}" }
                                }
                            }
                            FormSelect {
                                label: "Expected impact".to_string(),
                                value: impact().label().to_string(),
                                onchange: move |evt: Event<FormData>| {
                                    impact.set(parse_impact(&evt.value()));
                                },
                                for level in ImpactLevel::ALL {
                                    option { value: "{level.label()}", "{level.label()}" }
                                }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: submit,
                                "Submit initiative"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InitiativeCard(
    initiative: Initiative,
    reviewer: bool,
    on_review: EventHandler<(i64, InitiativeStatus)>,
) -> Element {
    let actions = review_actions(initiative.status);
    rsx! {
        Card { class: "initiative-card",
            CardContent {
                div { class: "initiative-card-head",
                    h3 { class: "initiative-card-title", "{initiative.title}" }
                    Badge { variant: status_badge_variant(initiative.status),
                        "{initiative.status.label()}"
                    }
                }
                p { class: "initiative-card-problem", "{initiative.description}" }
                p { class: "initiative-card-solution", "{initiative.solution}" }
                div { class: "initiative-card-meta",
                    Badge { variant: BadgeVariant::Secondary, "{initiative.category.label()}" }
                    Badge { variant: BadgeVariant::Outline, "Impact: {initiative.expected_impact.label()}" }
                    span { class: "initiative-card-counts",
                        "{initiative.votes} votes · {initiative.comments} comments"
                    }
                }
                div { class: "initiative-card-author",
                    Avatar { token: initiative.author_avatar.clone(), size: AvatarSize::Small }
                    span { "{initiative.author} · {initiative.date}" }
                }
                if reviewer && !actions.is_empty() {
                    div { class: "initiative-card-review",
                        for (next, action_label) in actions.iter().copied() {
                            Button {
                                variant: if next == InitiativeStatus::Rejected {
                                    ButtonVariant::Destructive
                                } else {
                                    ButtonVariant::Outline
                                },
                                onclick: {
                                    let id = initiative.id;
                                    move |_| on_review.call((id, next))
                                },
                                "{action_label}"
                            }
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
    fn complete_submission_passes_validation() {
        assert!(validate_initiative("Title", "Problem", "Solution").is_ok());
    }

    #[test]
    fn blank_fields_are_each_reported() {
        let err = validate_initiative(" ", "", "").unwrap_err();
        assert_eq!(err.field_errors.len(), 3);
    }

    #[test]
    fn status_filter_narrows_the_list() {
        let all = filter_initiatives(directory::initiatives(), None);
        assert_eq!(all.len(), 3);
        let new_only = filter_initiatives(directory::initiatives(), Some(InitiativeStatus::New));
        assert_eq!(new_only.len(), 1);
        assert_eq!(new_only[0].title, "Green office");
    }

    #[test]
    fn review_flow_is_new_then_under_review_then_decision() {
        let from_new: Vec<InitiativeStatus> = review_actions(InitiativeStatus::New)
            .iter()
            .map(|(next, _)| *next)
            .collect();
        assert_eq!(from_new, vec![InitiativeStatus::UnderReview]);

        let from_review: Vec<InitiativeStatus> = review_actions(InitiativeStatus::UnderReview)
            .iter()
            .map(|(next, _)| *next)
            .collect();
        assert_eq!(
            from_review,
            vec![InitiativeStatus::Accepted, InitiativeStatus::Rejected]
        );

        assert!(review_actions(InitiativeStatus::Completed).is_empty());
        assert!(review_actions(InitiativeStatus::Rejected).is_empty());
    }

    #[test]
    fn status_counts_cover_every_status_and_sum_to_the_total() {
        let initiatives = directory::initiatives();
        let counts = status_counts(&initiatives);
        assert_eq!(counts.len(), InitiativeStatus::ALL.len());
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, initiatives.len());
    }

    #[test]
    fn select_values_roundtrip_through_labels() {
        for status in InitiativeStatus::ALL {
            assert_eq!(parse_status_filter(status.label()), Some(status));
        }
        assert_eq!(parse_status_filter(""), None);
        for category in InitiativeCategory::ALL {
            assert_eq!(parse_category(category.label()), category);
        }
        for level in ImpactLevel::ALL {
            assert_eq!(parse_impact(level.label()), level);
        }
    }
}
