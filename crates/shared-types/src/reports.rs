use serde::{Deserialize, Serialize};

/// Company-wide HR key metrics shown on the reports dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HrMetrics {
    pub total_employees: u32,
    pub new_hires: u32,
    /// Retention rate in percent.
    pub retention: f32,
    /// Average satisfaction score (1.0–5.0).
    pub satisfaction: f32,
    pub kudos_given: u32,
    pub trainings_completed: u32,
    /// Training budget utilization in percent.
    pub budget_utilization: f32,
}

/// Per-department breakdown row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentStats {
    pub name: String,
    pub employees: u32,
    pub satisfaction: f32,
    pub kudos: u32,
}

/// Most-recognized employee row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopPerformer {
    pub name: String,
    pub department: String,
    pub kudos: u32,
    pub avatar: String,
}

/// One month of engagement trend data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTrend {
    pub month: String,
    pub kudos: u32,
    pub trainings: u32,
    pub satisfaction: f32,
}
