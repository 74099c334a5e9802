use super::ModuleGate;
use crate::session::use_role;
use dioxus::prelude::*;
use portal::directory;
use portal::{policy, ModuleId};
use shared_types::{Department, EmployeeRecord, Role};
use shared_ui::{
    Avatar, AvatarSize, Badge, BadgeVariant, Card, CardContent, FormSelect, Input, PageHeader,
    PageSubtitle, PageTitle,
};

/// Department filter options in display order.
const DEPARTMENTS: [Department; 6] = [
    Department::It,
    Department::Hr,
    Department::Board,
    Department::Production,
    Department::Sales,
    Department::Finance,
];

/// Case-insensitive name/email search combined with exact role and
/// department filters. `None` means the filter is off.
fn filter_employees(
    records: Vec<EmployeeRecord>,
    query: &str,
    role: Option<Role>,
    department: Option<Department>,
) -> Vec<EmployeeRecord> {
    let query = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            let matches_query = query.is_empty()
                || r.name.to_lowercase().contains(&query)
                || r.email.to_lowercase().contains(&query);
            let matches_role = role.map(|wanted| r.role == wanted).unwrap_or(true);
            let matches_department = department
                .map(|wanted| r.department == wanted)
                .unwrap_or(true);
            matches_query && matches_role && matches_department
        })
        .collect()
}

fn parse_role_filter(value: &str) -> Option<Role> {
    if value.is_empty() {
        None
    } else {
        Some(Role::from_str_or_default(value))
    }
}

fn parse_department_filter(value: &str) -> Option<Department> {
    DEPARTMENTS.into_iter().find(|d| d.label() == value)
}

#[component]
pub fn Employees() -> Element {
    rsx! {
        ModuleGate { module: ModuleId::Employees,
            EmployeesView {}
        }
    }
}

/// Employee directory with search and role/department filters.
#[component]
fn EmployeesView() -> Element {
    let viewer_role = use_role();
    let mut query = use_signal(String::new);
    let mut role_filter = use_signal(|| Option::<Role>::None);
    let mut department_filter = use_signal(|| Option::<Department>::None);

    // The route guard already enforces this; the view checks again so it
    // never renders directory data under a stale decision.
    if !policy::can_manage_employees(viewer_role) {
        return rsx! {};
    }

    let rows = filter_employees(
        directory::employees(),
        &query(),
        role_filter(),
        department_filter(),
    );
    let total = rows.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./employees.css") }

        div { class: "employees-page",
            PageHeader {
                div {
                    PageTitle { "Employees" }
                    PageSubtitle { "{total} people in the directory" }
                }
            }

            div { class: "employees-filters",
                Input {
                    placeholder: "Search by name or email...".to_string(),
                    value: query(),
                    on_input: move |evt: FormEvent| query.set(evt.value()),
                }
                FormSelect {
                    value: role_filter().map(|r| r.as_str().to_string()).unwrap_or_default(),
                    onchange: move |evt: Event<FormData>| {
                        role_filter.set(parse_role_filter(&evt.value()));
                    },
                    option { value: "", "All roles" }
                    for role in Role::ALL {
                        option { value: "{role.as_str()}", "{role.label()}" }
                    }
                }
                FormSelect {
                    value: department_filter().map(|d| d.label().to_string()).unwrap_or_default(),
                    onchange: move |evt: Event<FormData>| {
                        department_filter.set(parse_department_filter(&evt.value()));
                    },
                    option { value: "", "All departments" }
                    for department in DEPARTMENTS {
                        option { value: "{department.label()}", "{department.label()}" }
                    }
                }
            }

            div { class: "employees-list",
                for record in rows {
                    EmployeeRow { record }
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(record: EmployeeRecord) -> Element {
    rsx! {
        Card { class: "employee-row",
            CardContent { class: "employee-row-content",
                Avatar { token: record.avatar.clone(), size: AvatarSize::Medium }
                div { class: "employee-row-text",
                    span { class: "employee-row-name", "{record.name}" }
                    span { class: "employee-row-email", "{record.email}" }
                }
                div { class: "employee-row-badges",
                    Badge { variant: BadgeVariant::Secondary, "{record.department.label()}" }
                    Badge { variant: BadgeVariant::Outline, "{record.role.label()}" }
                    if record.active {
                        Badge { variant: BadgeVariant::Success, "Active" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<EmployeeRecord> {
        directory::employees()
    }

    #[test]
    fn no_filters_returns_everyone() {
        assert_eq!(filter_employees(records(), "", None, None).len(), 6);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let found = filter_employees(records(), "ANNA", None, None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Anna Kowalska");
    }

    #[test]
    fn search_matches_email() {
        let found = filter_employees(records(), "jan.nowak@", None, None);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn role_and_department_filters_combine() {
        let found = filter_employees(records(), "", Some(Role::HrCoordinator), Some(Department::Hr));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Maria Wiśniewska");

        let none = filter_employees(records(), "", Some(Role::HrCoordinator), Some(Department::It));
        assert!(none.is_empty());
    }

    #[test]
    fn empty_filter_values_disable_the_filters() {
        assert_eq!(parse_role_filter(""), None);
        assert_eq!(parse_department_filter(""), None);
        assert_eq!(parse_role_filter("team_lead"), Some(Role::TeamLead));
        assert_eq!(parse_department_filter("IT"), Some(Department::It));
    }
}
