use serde::{Deserialize, Serialize};

/// Portal role. Exactly one per identity; roles are labels, not sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Employee,
    TeamLead,
    HrCoordinator,
    SystemAdmin,
    InitiativeCoordinator,
    ExecutiveBoard,
}

impl Role {
    /// Every role, in a stable order. Used by policy tests and the
    /// employee-list role filter.
    pub const ALL: [Role; 6] = [
        Role::Employee,
        Role::TeamLead,
        Role::HrCoordinator,
        Role::SystemAdmin,
        Role::InitiativeCoordinator,
        Role::ExecutiveBoard,
    ];

    /// Parse from a stored role string. Unknown values default to Employee
    /// (least privilege).
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "team_lead" => Role::TeamLead,
            "hr_coordinator" => Role::HrCoordinator,
            "system_admin" => Role::SystemAdmin,
            "initiative_coordinator" => Role::InitiativeCoordinator,
            "executive_board" => Role::ExecutiveBoard,
            _ => Role::Employee,
        }
    }

    /// Lowercase string form for storage and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::TeamLead => "team_lead",
            Role::HrCoordinator => "hr_coordinator",
            Role::SystemAdmin => "system_admin",
            Role::InitiativeCoordinator => "initiative_coordinator",
            Role::ExecutiveBoard => "executive_board",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::TeamLead => "Team Lead",
            Role::HrCoordinator => "HR Coordinator",
            Role::SystemAdmin => "System Administrator",
            Role::InitiativeCoordinator => "Initiative Coordinator",
            Role::ExecutiveBoard => "Executive Board",
        }
    }
}

/// Organizational unit an identity belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    It,
    Hr,
    Board,
    Production,
    Sales,
    Finance,
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Board => "Board",
            Department::Production => "Production",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
        }
    }
}

/// The authenticated user record for the current session.
///
/// Created at login by selecting an entry from the identity directory and
/// discarded at logout. Immutable while a session lasts; profile-editable
/// fields live in [`ProfileExtras`], not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Department,
    /// Opaque display token rendered inside the avatar circle.
    pub avatar: String,
}

impl User {
    /// First name for greetings, falling back to the full name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// A row in the employee directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: Department,
    pub avatar: String,
    pub active: bool,
}

/// Profile fields the user may edit, kept apart from the identity record
/// and keyed by user id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileExtras {
    pub user_id: i64,
    pub phone: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_string_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn unknown_role_defaults_to_employee() {
        assert_eq!(Role::from_str_or_default("superuser"), Role::Employee);
        assert_eq!(Role::from_str_or_default(""), Role::Employee);
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(
            Role::from_str_or_default("Executive_Board"),
            Role::ExecutiveBoard
        );
    }

    #[test]
    fn first_name_splits_on_whitespace() {
        let user = User {
            id: 1,
            name: "Anna Kowalska".to_string(),
            email: "anna.kowalska@energetyka.pl".to_string(),
            role: Role::Employee,
            department: Department::It,
            avatar: "👩‍💻".to_string(),
        };
        assert_eq!(user.first_name(), "Anna");
    }

    #[test]
    fn user_roundtrip_through_json() {
        let user = User {
            id: 5,
            name: "Katarzyna Zielińska".to_string(),
            email: "katarzyna.zielinska@energetyka.pl".to_string(),
            role: Role::ExecutiveBoard,
            department: Department::Board,
            avatar: "👩‍💼".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }
}
