//! Static mock data provider.
//!
//! Fixed, read-only inputs: the identity directory offered at login and the
//! per-module sample datasets. The core never mutates these; views copy
//! what they need into their own local state.

use chrono::NaiveDate;
use shared_types::{
    ApplicationStatus, Department, DepartmentStats, EmployeeRecord, HrMetrics, ImpactLevel,
    Initiative, InitiativeCategory, InitiativeStatus, KudosEntry, KudosVisibility, MonthlyTrend,
    ProfileExtras, Role, TopPerformer, Training, TrainingApplication, TrainingStatus, User,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The fixed directory of candidate identities offered at login.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Anna Kowalska".to_string(),
            email: "anna.kowalska@energetyka.pl".to_string(),
            role: Role::Employee,
            department: Department::It,
            avatar: "👩‍💻".to_string(),
        },
        User {
            id: 2,
            name: "Jan Nowak".to_string(),
            email: "jan.nowak@energetyka.pl".to_string(),
            role: Role::TeamLead,
            department: Department::Hr,
            avatar: "👨‍💼".to_string(),
        },
        User {
            id: 3,
            name: "Maria Wiśniewska".to_string(),
            email: "maria.wisniewska@energetyka.pl".to_string(),
            role: Role::HrCoordinator,
            department: Department::Hr,
            avatar: "👩‍💼".to_string(),
        },
        User {
            id: 4,
            name: "Piotr Kowalczyk".to_string(),
            email: "piotr.kowalczyk@energetyka.pl".to_string(),
            role: Role::SystemAdmin,
            department: Department::It,
            avatar: "👨‍💻".to_string(),
        },
        User {
            id: 5,
            name: "Katarzyna Zielińska".to_string(),
            email: "katarzyna.zielinska@energetyka.pl".to_string(),
            role: Role::ExecutiveBoard,
            department: Department::Board,
            avatar: "👩‍💼".to_string(),
        },
        User {
            id: 6,
            name: "Tomasz Dąbrowski".to_string(),
            email: "tomasz.dabrowski@energetyka.pl".to_string(),
            role: Role::InitiativeCoordinator,
            department: Department::Hr,
            avatar: "👨‍💼".to_string(),
        },
    ]
}

/// Directory rows for the employee-list module: the same six people, all
/// currently active.
pub fn employees() -> Vec<EmployeeRecord> {
    users()
        .into_iter()
        .map(|u| EmployeeRecord {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            department: u.department,
            avatar: u.avatar,
            active: true,
        })
        .collect()
}

/// The company values a kudos may be tied to.
pub fn company_values() -> &'static [&'static str] {
    &[
        "Entrepreneurship",
        "Autonomy",
        "Transparency",
        "Collaboration",
        "Responsibility",
        "Growth",
        "Sustainability",
        "Innovation",
    ]
}

pub fn kudos_entries() -> Vec<KudosEntry> {
    vec![
        KudosEntry {
            id: 1,
            giver: "Jan Nowak".to_string(),
            giver_avatar: "👨‍💼".to_string(),
            recipient: "Anna Kowalska".to_string(),
            recipient_avatar: "👩‍💻".to_string(),
            value: "Collaboration".to_string(),
            reason: "Outstanding cooperation on the TARCZA project. Anna was always ready to \
                     help the team."
                .to_string(),
            date: date(2024, 1, 15),
            visibility: KudosVisibility::Public,
        },
        KudosEntry {
            id: 2,
            giver: "Maria Wiśniewska".to_string(),
            giver_avatar: "👩‍💼".to_string(),
            recipient: "Piotr Kowalczyk".to_string(),
            recipient_avatar: "👨‍💻".to_string(),
            value: "Innovation".to_string(),
            reason: "Introduced a novel solution that significantly streamlined our system."
                .to_string(),
            date: date(2024, 1, 14),
            visibility: KudosVisibility::Public,
        },
    ]
}

pub fn initiatives() -> Vec<Initiative> {
    vec![
        Initiative {
            id: 1,
            title: "Automate HR reports".to_string(),
            description: "Producing HR reports takes too long today and is error-prone."
                .to_string(),
            solution: "Generate the reports automatically from the database.".to_string(),
            category: InitiativeCategory::ProcessImprovement,
            expected_impact: ImpactLevel::High,
            author: "Anna Kowalska".to_string(),
            author_avatar: "👩‍💻".to_string(),
            status: InitiativeStatus::InProgress,
            date: date(2024, 1, 15),
            votes: 15,
            comments: 8,
        },
        Initiative {
            id: 2,
            title: "Mentoring program".to_string(),
            description: "New employees need better support during onboarding.".to_string(),
            solution: "Create a formal mentoring program for new hires.".to_string(),
            category: InitiativeCategory::Culture,
            expected_impact: ImpactLevel::Medium,
            author: "Jan Nowak".to_string(),
            author_avatar: "👨‍💼".to_string(),
            status: InitiativeStatus::Accepted,
            date: date(2024, 1, 12),
            votes: 22,
            comments: 12,
        },
        Initiative {
            id: 3,
            title: "Green office".to_string(),
            description: "Make our workplace more environmentally friendly.".to_string(),
            solution: "Introduce recycling, reduce paper use, add plants to the office."
                .to_string(),
            category: InitiativeCategory::Workplace,
            expected_impact: ImpactLevel::Medium,
            author: "Maria Wiśniewska".to_string(),
            author_avatar: "👩‍💼".to_string(),
            status: InitiativeStatus::New,
            date: date(2024, 1, 10),
            votes: 18,
            comments: 5,
        },
    ]
}

/// Training catalog categories, including the "all" filter sentinel handled
/// by the view.
pub fn training_categories() -> &'static [&'static str] {
    &[
        "Management",
        "Technical",
        "Soft skills",
        "IT",
        "Safety",
    ]
}

pub fn trainings() -> Vec<Training> {
    vec![
        Training {
            id: 1,
            title: "Leading teams in a teal organization".to_string(),
            provider: "Development Academy".to_string(),
            category: "Management".to_string(),
            cost: 2500,
            duration: "3 days".to_string(),
            description: "Modern team-leadership methods aligned with the teal-organization \
                          philosophy."
                .to_string(),
            status: TrainingStatus::Available,
            deadline: Some(date(2024, 3, 15)),
            effectiveness: None,
        },
        Training {
            id: 2,
            title: "Renewable energy - photovoltaics".to_string(),
            provider: "Energy Institute".to_string(),
            category: "Technical".to_string(),
            cost: 3200,
            duration: "5 days".to_string(),
            description: "Comprehensive training on designing and installing photovoltaic \
                          systems."
                .to_string(),
            status: TrainingStatus::Pending,
            deadline: Some(date(2024, 2, 28)),
            effectiveness: None,
        },
        Training {
            id: 3,
            title: "Team communication".to_string(),
            provider: "HR Excellence".to_string(),
            category: "Soft skills".to_string(),
            cost: 1800,
            duration: "2 days".to_string(),
            description: "Effective internal and external communication.".to_string(),
            status: TrainingStatus::Completed,
            deadline: None,
            effectiveness: Some(4.2),
        },
    ]
}

pub fn training_applications() -> Vec<TrainingApplication> {
    vec![
        TrainingApplication {
            id: 1,
            training_id: 2,
            employee_name: "Jan Nowak".to_string(),
            employee_avatar: "👨‍💼".to_string(),
            status: ApplicationStatus::Pending,
            applied_date: date(2024, 1, 20),
            justification: "I want to grow my renewable-energy competence to better support \
                            the team's projects."
                .to_string(),
            budget: 3200,
        },
        TrainingApplication {
            id: 2,
            training_id: 1,
            employee_name: "Anna Kowalska".to_string(),
            employee_avatar: "👩‍💻".to_string(),
            status: ApplicationStatus::Approved,
            applied_date: date(2024, 1, 18),
            justification: "As a team lead I want to deepen my knowledge of leadership in a \
                            teal organization."
                .to_string(),
            budget: 2500,
        },
    ]
}

pub fn hr_metrics() -> HrMetrics {
    HrMetrics {
        total_employees: 498,
        new_hires: 23,
        retention: 94.2,
        satisfaction: 4.3,
        kudos_given: 847,
        trainings_completed: 156,
        budget_utilization: 78.5,
    }
}

pub fn department_stats() -> Vec<DepartmentStats> {
    [
        ("IT", 145, 4.5, 234),
        ("HR", 34, 4.2, 156),
        ("Board", 12, 4.1, 89),
        ("Production", 187, 4.0, 278),
        ("Sales", 76, 4.4, 134),
        ("Finance", 44, 4.3, 98),
    ]
    .into_iter()
    .map(|(name, employees, satisfaction, kudos)| DepartmentStats {
        name: name.to_string(),
        employees,
        satisfaction,
        kudos,
    })
    .collect()
}

pub fn top_performers() -> Vec<TopPerformer> {
    [
        ("Anna Kowalska", "IT", 45, "👩‍💻"),
        ("Jan Nowak", "HR", 38, "👨‍💼"),
        ("Maria Wiśniewska", "HR", 34, "👩‍💼"),
        ("Piotr Kowalczyk", "IT", 32, "👨‍💻"),
        ("Katarzyna Zielińska", "Board", 29, "👩‍💼"),
    ]
    .into_iter()
    .map(|(name, department, kudos, avatar)| TopPerformer {
        name: name.to_string(),
        department: department.to_string(),
        kudos,
        avatar: avatar.to_string(),
    })
    .collect()
}

pub fn monthly_trends() -> Vec<MonthlyTrend> {
    [
        ("Jan", 67, 12, 4.1),
        ("Feb", 73, 15, 4.2),
        ("Mar", 82, 18, 4.3),
        ("Apr", 78, 14, 4.2),
        ("May", 89, 21, 4.4),
        ("Jun", 94, 19, 4.3),
    ]
    .into_iter()
    .map(|(month, kudos, trainings, satisfaction)| MonthlyTrend {
        month: month.to_string(),
        kudos,
        trainings,
        satisfaction,
    })
    .collect()
}

/// Default profile extras for a directory user. Unknown ids get an empty
/// record keyed to the id, so the profile view always has something to edit.
pub fn profile_extras(user_id: i64) -> ProfileExtras {
    let (phone, bio, skills, interests): (&str, &str, &[&str], &[&str]) = match user_id {
        1 => (
            "+48 123 456 789",
            "Experienced IT specialist with a passion for innovative solutions.",
            &["React", "TypeScript", "Node.js", "Python", "Docker"],
            &["Artificial intelligence", "Sustainability", "Photography"],
        ),
        2 => (
            "+48 501 234 567",
            "Team lead focused on people development and open communication.",
            &["Leadership", "Coaching", "Recruitment"],
            &["Psychology", "Running", "Chess"],
        ),
        3 => (
            "+48 602 345 678",
            "HR coordinator building people-first processes.",
            &["HR processes", "Labor law", "Onboarding"],
            &["Employer branding", "Yoga"],
        ),
        _ => ("", "", &[], &[]),
    };
    ProfileExtras {
        user_id,
        phone: phone.to_string(),
        bio: bio.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_six_unique_identities_covering_every_role() {
        let users = users();
        assert_eq!(users.len(), 6);
        let mut ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        for role in Role::ALL {
            assert!(users.iter().any(|u| u.role == role), "missing {:?}", role);
        }
    }

    #[test]
    fn employees_mirror_the_identity_directory() {
        let employees = employees();
        assert_eq!(employees.len(), users().len());
        assert!(employees.iter().all(|e| e.active));
    }

    #[test]
    fn applications_reference_catalog_trainings() {
        let training_ids: Vec<i64> = trainings().iter().map(|t| t.id).collect();
        for application in training_applications() {
            assert!(training_ids.contains(&application.training_id));
        }
    }

    #[test]
    fn profile_extras_are_keyed_by_user_id() {
        assert_eq!(profile_extras(1).user_id, 1);
        assert!(!profile_extras(1).skills.is_empty());
        // Unknown ids still produce a usable record.
        let unknown = profile_extras(99);
        assert_eq!(unknown.user_id, 99);
        assert!(unknown.skills.is_empty());
    }
}
