use portal::directory;
use pretty_assertions::assert_eq;
use shared_types::{InitiativeStatus, KudosVisibility, Role, TrainingStatus};

#[test]
fn identity_directory_is_stable_between_calls() {
    assert_eq!(directory::users(), directory::users());
}

#[test]
fn directory_emails_share_the_company_domain() {
    for user in directory::users() {
        assert!(
            user.email.ends_with("@energetyka.pl"),
            "{} has a foreign domain",
            user.email
        );
    }
}

#[test]
fn every_role_can_be_picked_at_login() {
    let users = directory::users();
    for role in Role::ALL {
        assert!(users.iter().any(|u| u.role == role), "{:?}", role);
    }
}

#[test]
fn sample_kudos_are_public() {
    for entry in directory::kudos_entries() {
        assert_eq!(entry.visibility, KudosVisibility::Public);
        assert!(directory::company_values().contains(&entry.value.as_str()));
    }
}

#[test]
fn sample_initiatives_cover_distinct_statuses() {
    let statuses: Vec<InitiativeStatus> = directory::initiatives()
        .iter()
        .map(|i| i.status)
        .collect();
    assert!(statuses.contains(&InitiativeStatus::New));
    assert!(statuses.contains(&InitiativeStatus::Accepted));
    assert!(statuses.contains(&InitiativeStatus::InProgress));
}

#[test]
fn catalog_trainings_belong_to_known_categories() {
    let categories = directory::training_categories();
    for training in directory::trainings() {
        assert!(categories.contains(&training.category.as_str()));
    }
}

#[test]
fn completed_trainings_carry_an_effectiveness_score() {
    for training in directory::trainings() {
        if training.status == TrainingStatus::Completed {
            assert!(training.effectiveness.is_some());
        } else {
            assert!(training.effectiveness.is_none());
        }
    }
}

#[test]
fn report_datasets_have_the_expected_shape() {
    assert_eq!(directory::department_stats().len(), 6);
    assert_eq!(directory::top_performers().len(), 5);
    assert_eq!(directory::monthly_trends().len(), 6);
    let metrics = directory::hr_metrics();
    assert!(metrics.total_employees > 0);
    assert!(metrics.satisfaction <= 5.0);
}
