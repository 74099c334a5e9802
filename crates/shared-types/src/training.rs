use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a catalog training.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    Available,
    Pending,
    Approved,
    Completed,
}

impl TrainingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrainingStatus::Available => "Available",
            TrainingStatus::Pending => "Pending",
            TrainingStatus::Approved => "Approved",
            TrainingStatus::Completed => "Completed",
        }
    }
}

/// A training offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Training {
    pub id: i64,
    pub title: String,
    pub provider: String,
    pub category: String,
    /// Cost in PLN.
    pub cost: u32,
    pub duration: String,
    pub description: String,
    pub status: TrainingStatus,
    pub deadline: Option<NaiveDate>,
    /// Post-completion effectiveness score (1.0–5.0).
    pub effectiveness: Option<f32>,
}

/// Decision state of a training application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// An employee's application to attend a training.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingApplication {
    pub id: i64,
    pub training_id: i64,
    pub employee_name: String,
    pub employee_avatar: String,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    pub justification: String,
    /// Requested budget in PLN.
    pub budget: u32,
}
