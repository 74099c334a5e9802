use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of an employee initiative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeCategory {
    ProcessImprovement,
    Savings,
    Culture,
    Technology,
    Workplace,
    Other,
}

impl InitiativeCategory {
    pub const ALL: [InitiativeCategory; 6] = [
        InitiativeCategory::ProcessImprovement,
        InitiativeCategory::Savings,
        InitiativeCategory::Culture,
        InitiativeCategory::Technology,
        InitiativeCategory::Workplace,
        InitiativeCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InitiativeCategory::ProcessImprovement => "Process improvement",
            InitiativeCategory::Savings => "Savings",
            InitiativeCategory::Culture => "Organizational culture",
            InitiativeCategory::Technology => "Technology",
            InitiativeCategory::Workplace => "Work environment",
            InitiativeCategory::Other => "Other",
        }
    }
}

/// Expected impact declared by the submitter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 3] = [ImpactLevel::Low, ImpactLevel::Medium, ImpactLevel::High];

    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
        }
    }
}

/// Review/lifecycle status of an initiative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeStatus {
    New,
    UnderReview,
    Accepted,
    InProgress,
    Completed,
    Rejected,
}

impl InitiativeStatus {
    pub const ALL: [InitiativeStatus; 6] = [
        InitiativeStatus::New,
        InitiativeStatus::UnderReview,
        InitiativeStatus::Accepted,
        InitiativeStatus::InProgress,
        InitiativeStatus::Completed,
        InitiativeStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InitiativeStatus::New => "New",
            InitiativeStatus::UnderReview => "Under review",
            InitiativeStatus::Accepted => "Accepted",
            InitiativeStatus::InProgress => "In progress",
            InitiativeStatus::Completed => "Completed",
            InitiativeStatus::Rejected => "Rejected",
        }
    }
}

/// An employee-submitted improvement initiative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Initiative {
    pub id: i64,
    pub title: String,
    /// The problem the initiative addresses.
    pub description: String,
    /// The proposed solution.
    pub solution: String,
    pub category: InitiativeCategory,
    pub expected_impact: ImpactLevel,
    pub author: String,
    pub author_avatar: String,
    pub status: InitiativeStatus,
    pub date: NaiveDate,
    pub votes: u32,
    pub comments: u32,
}
