use super::ModuleGate;
use crate::session::use_role;
use dioxus::prelude::*;
use portal::directory;
use portal::{policy, ModuleId};
use shared_types::{AppError, ApplicationStatus, Training as TrainingEntry, TrainingApplication, TrainingStatus};
use shared_ui::{
    Avatar, AvatarSize, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, FormSelect, PageHeader, PageSubtitle, PageTitle, TabList, TabTrigger, Textarea,
};
use std::collections::HashMap;

/// Category filter; `None` keeps the whole catalog.
fn filter_trainings(catalog: Vec<TrainingEntry>, category: Option<&str>) -> Vec<TrainingEntry> {
    catalog
        .into_iter()
        .filter(|t| category.map(|wanted| t.category == wanted).unwrap_or(true))
        .collect()
}

/// Validate a training application.
fn validate_application(training_id: Option<i64>, justification: &str) -> Result<(), AppError> {
    let mut fields = HashMap::new();
    if training_id.is_none() {
        fields.insert("training".to_string(), "Select a training".to_string());
    }
    if justification.trim().is_empty() {
        fields.insert(
            "justification".to_string(),
            "Explain why you want to attend".to_string(),
        );
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Complete the highlighted fields", fields))
    }
}

/// Catalog title for an application row, tolerating dangling ids.
fn training_title(catalog: &[TrainingEntry], training_id: i64) -> String {
    catalog
        .iter()
        .find(|t| t.id == training_id)
        .map(|t| t.title.clone())
        .unwrap_or_else(|| format!("Training #{training_id}"))
}

/// Record a reviewer decision on a pending application. Decided rows are
/// left untouched so a double click cannot flip an outcome.
fn apply_decision(applications: &mut [TrainingApplication], id: i64, status: ApplicationStatus) {
    if let Some(application) = applications
        .iter_mut()
        .find(|a| a.id == id && a.status == ApplicationStatus::Pending)
    {
        application.status = status;
    }
}

fn training_status_variant(status: TrainingStatus) -> BadgeVariant {
    match status {
        TrainingStatus::Available => BadgeVariant::Primary,
        TrainingStatus::Pending => BadgeVariant::Outline,
        TrainingStatus::Approved => BadgeVariant::Success,
        TrainingStatus::Completed => BadgeVariant::Secondary,
    }
}

fn application_status_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::Pending => BadgeVariant::Outline,
        ApplicationStatus::Approved => BadgeVariant::Success,
        ApplicationStatus::Rejected => BadgeVariant::Destructive,
    }
}

#[component]
pub fn Training() -> Element {
    rsx! {
        ModuleGate { module: ModuleId::Training,
            TrainingView {}
        }
    }
}

/// Training module: catalog with category filter, an application form,
/// and (for reviewing roles) the pending applications list.
#[component]
fn TrainingView() -> Element {
    let role = use_role();
    let reviewer = policy::can_review_applications(role);

    let mut active_tab = use_signal(|| "catalog");
    let mut category_filter = use_signal(|| Option::<String>::None);

    let mut selected_training = use_signal(|| Option::<i64>::None);
    let mut justification = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut submitted = use_signal(|| false);

    let mut applications = use_signal(directory::training_applications);

    let catalog = directory::trainings();
    let filtered = filter_trainings(catalog.clone(), category_filter().as_deref());

    // Decisions live in view state; a reload restores the samples.
    let on_decide = move |(id, status): (i64, ApplicationStatus)| {
        tracing::info!(
            application_id = id,
            status = status.label(),
            "training application decided"
        );
        apply_decision(&mut applications.write(), id, status);
    };

    let submit = move |_| {
        submitted.set(false);
        match validate_application(selected_training(), &justification()) {
            Ok(()) => {
                tracing::info!(
                    training_id = selected_training().unwrap_or_default(),
                    "training application submitted"
                );
                selected_training.set(None);
                justification.set(String::new());
                field_errors.set(HashMap::new());
                submitted.set(true);
            }
            Err(err) => field_errors.set(err.field_errors),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./training.css") }

        div { class: "training-page",
            PageHeader {
                div {
                    PageTitle { "Training" }
                    PageSubtitle { "Manage trainings and competence development" }
                }
            }

            TabList {
                TabTrigger {
                    active: active_tab() == "catalog",
                    onclick: move |_| active_tab.set("catalog"),
                    "Catalog"
                }
                TabTrigger {
                    active: active_tab() == "apply",
                    onclick: move |_| active_tab.set("apply"),
                    "Apply"
                }
                if reviewer {
                    TabTrigger {
                        active: active_tab() == "applications",
                        onclick: move |_| active_tab.set("applications"),
                        "Applications"
                    }
                }
            }

            if active_tab() == "catalog" {
                FormSelect {
                    label: "Category".to_string(),
                    value: category_filter().unwrap_or_default(),
                    onchange: move |evt: Event<FormData>| {
                        let value = evt.value();
                        category_filter.set(if value.is_empty() { None } else { Some(value) });
                    },
                    option { value: "", "All categories" }
                    for category in portal::directory::training_categories() {
                        option { value: "{category}", "{category}" }
                    }
                }
                div { class: "training-list",
                    for training in filtered {
                        TrainingCard { training }
                    }
                }
            } else if active_tab() == "apply" {
                Card {
                    CardHeader {
                        CardTitle { "Apply for a training" }
                    }
                    CardContent {
                        if submitted() {
                            div { class: "training-success",
                                "Application sent. Your team lead will review it."
                            }
                        }
                        div { class: "training-form",
                            FormSelect {
                                label: "Training".to_string(),
                                value: selected_training().map(|id| id.to_string()).unwrap_or_default(),
                                invalid: field_errors().contains_key("training"),
                                onchange: move |evt: Event<FormData>| {
                                    selected_training.set(evt.value().parse::<i64>().ok());
                                },
                                option { value: "", "Select a training..." }
                                for training in catalog.iter().filter(|t| t.status == TrainingStatus::Available) {
                                    option { value: "{training.id}", "{training.title}" }
                                }
                            }
                            if let Some(msg) = field_errors().get("training") {
                                span { class: "training-field-error", "{msg}" }
                            }
                            Textarea {
                                label: "Justification".to_string(),
                                placeholder: "How will this training help your work?".to_string(),
                                value: justification(),
                                on_input: move |evt: FormEvent| justification.set(evt.value()),
                            }
                            if let Some(msg) = field_errors().get("justification") {
                                span { class: "training-field-error", "{msg}" }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: submit,
                                "Send application"
                            }
                        }
                    }
                }
            } else {
                div { class: "training-applications",
                    for application in applications() {
                        ApplicationCard {
                            title: training_title(&catalog, application.training_id),
                            application,
                            can_decide: reviewer,
                            on_decide,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TrainingCard(training: TrainingEntry) -> Element {
    rsx! {
        Card { class: "training-card",
            CardContent {
                div { class: "training-card-head",
                    h3 { class: "training-card-title", "{training.title}" }
                    Badge { variant: training_status_variant(training.status),
                        "{training.status.label()}"
                    }
                }
                p { class: "training-card-description", "{training.description}" }
                div { class: "training-card-meta",
                    Badge { variant: BadgeVariant::Secondary, "{training.category}" }
                    span { "{training.provider}" }
                    span { "{training.duration}" }
                    span { class: "training-card-cost", "{training.cost} PLN" }
                }
                if let Some(deadline) = training.deadline {
                    p { class: "training-card-deadline", "Apply by {deadline}" }
                }
                if let Some(score) = training.effectiveness {
                    p { class: "training-card-deadline", "Effectiveness: {score:.1}/5.0" }
                }
            }
        }
    }
}

#[component]
fn ApplicationCard(
    title: String,
    application: TrainingApplication,
    can_decide: bool,
    on_decide: EventHandler<(i64, ApplicationStatus)>,
) -> Element {
    let id = application.id;
    rsx! {
        Card { class: "application-card",
            CardContent {
                div { class: "application-card-head",
                    Avatar { token: application.employee_avatar.clone(), size: AvatarSize::Small }
                    span { class: "application-card-name", "{application.employee_name}" }
                    Badge { variant: application_status_variant(application.status),
                        "{application.status.label()}"
                    }
                }
                p { class: "application-card-training", "{title}" }
                p { class: "application-card-justification", "\"{application.justification}\"" }
                div { class: "application-card-meta",
                    span { "Applied {application.applied_date}" }
                    span { "Budget: {application.budget} PLN" }
                }
                if can_decide && application.status == ApplicationStatus::Pending {
                    div { class: "application-card-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_decide.call((id, ApplicationStatus::Approved)),
                            "Approve"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| on_decide.call((id, ApplicationStatus::Rejected)),
                            "Reject"
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
    fn category_filter_narrows_the_catalog() {
        let all = filter_trainings(directory::trainings(), None);
        assert_eq!(all.len(), 3);
        let technical = filter_trainings(directory::trainings(), Some("Technical"));
        assert_eq!(technical.len(), 1);
        assert_eq!(technical[0].category, "Technical");
    }

    #[test]
    fn application_requires_training_and_justification() {
        assert!(validate_application(Some(1), "I want to grow").is_ok());
        let err = validate_application(None, " ").unwrap_err();
        assert_eq!(err.field_errors.len(), 2);
    }

    #[test]
    fn decisions_only_move_pending_applications() {
        let mut applications = directory::training_applications();
        let pending = applications
            .iter()
            .find(|a| a.status == ApplicationStatus::Pending)
            .map(|a| a.id)
            .unwrap();

        apply_decision(&mut applications, pending, ApplicationStatus::Approved);
        let decided = applications.iter().find(|a| a.id == pending).unwrap();
        assert_eq!(decided.status, ApplicationStatus::Approved);

        // A second decision on the same row is ignored.
        apply_decision(&mut applications, pending, ApplicationStatus::Rejected);
        let decided = applications.iter().find(|a| a.id == pending).unwrap();
        assert_eq!(decided.status, ApplicationStatus::Approved);
    }

    #[test]
    fn application_rows_resolve_catalog_titles() {
        let catalog = directory::trainings();
        for application in directory::training_applications() {
            let title = training_title(&catalog, application.training_id);
            assert!(!title.starts_with("Training #"));
        }
        assert_eq!(training_title(&catalog, 999), "Training #999");
    }
}
