use super::ModuleGate;
use dioxus::prelude::*;
use portal::directory;
use portal::ModuleId;
use shared_ui::{
    Avatar, AvatarSize, Card, CardContent, CardHeader, CardTitle, PageHeader, PageSubtitle,
    PageTitle, Progress, Separator, StatCard,
};

/// Scale a 1.0–5.0 satisfaction score to a 0–100 bar width.
fn satisfaction_percent(score: f32) -> u8 {
    ((score / 5.0) * 100.0).clamp(0.0, 100.0) as u8
}

/// Scale a monthly kudos count against the best month for the trend bars.
fn trend_percent(value: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    ((value * 100) / max).min(100) as u8
}

#[component]
pub fn Reports() -> Element {
    rsx! {
        ModuleGate { module: ModuleId::Reports,
            ReportsView {}
        }
    }
}

/// Strategic HR reports: key metrics, per-department breakdown, most
/// recognized people, and the engagement trend.
#[component]
fn ReportsView() -> Element {
    let metrics = directory::hr_metrics();
    let departments = directory::department_stats();
    let performers: Vec<(usize, shared_types::TopPerformer)> = directory::top_performers()
        .into_iter()
        .enumerate()
        .map(|(index, performer)| (index + 1, performer))
        .collect();
    let trends = directory::monthly_trends();
    let max_kudos = trends.iter().map(|t| t.kudos).max().unwrap_or(0);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        div { class: "reports-page",
            PageHeader {
                div {
                    PageTitle { "Reports & Analytics" }
                    PageSubtitle { "Strategic HR reports and indicators" }
                }
            }

            div { class: "reports-stats",
                StatCard {
                    value: metrics.total_employees.to_string(),
                    label: "Employees".to_string(),
                    footnote: format!("+{} new hires this quarter", metrics.new_hires),
                    color: "blue".to_string(),
                }
                StatCard {
                    value: format!("{:.1}%", metrics.retention),
                    label: "Retention".to_string(),
                    color: "green".to_string(),
                }
                StatCard {
                    value: metrics.kudos_given.to_string(),
                    label: "Kudos given".to_string(),
                    color: "orange".to_string(),
                }
                StatCard {
                    value: format!("{:.1}%", metrics.budget_utilization),
                    label: "Training budget used".to_string(),
                    footnote: format!("{} trainings completed", metrics.trainings_completed),
                    color: "purple".to_string(),
                }
            }

            div { class: "reports-columns",
                Card {
                    CardHeader {
                        CardTitle { "Departments" }
                    }
                    CardContent {
                        for stats in departments {
                            div { class: "reports-department",
                                div { class: "reports-department-head",
                                    span { class: "reports-department-name", "{stats.name}" }
                                    span { class: "reports-department-meta",
                                        "{stats.employees} people · {stats.kudos} kudos · {stats.satisfaction:.1}/5.0"
                                    }
                                }
                                Progress { percent: satisfaction_percent(stats.satisfaction) }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Most recognized" }
                    }
                    CardContent {
                        for (rank, performer) in performers {
                            div { class: "reports-performer",
                                span { class: "reports-performer-rank", "{rank}." }
                                Avatar { token: performer.avatar.clone(), size: AvatarSize::Small }
                                span { class: "reports-performer-name", "{performer.name}" }
                                span { class: "reports-performer-meta",
                                    "{performer.department} · {performer.kudos} kudos"
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Engagement trend" }
                }
                CardContent {
                    for trend in trends {
                        div { class: "reports-trend",
                            span { class: "reports-trend-month", "{trend.month}" }
                            div { class: "reports-trend-bar",
                                Progress { percent: trend_percent(trend.kudos, max_kudos) }
                            }
                            span { class: "reports-trend-meta",
                                "{trend.kudos} kudos · {trend.trainings} trainings · {trend.satisfaction:.1}/5.0"
                            }
                        }
                    }
                    Separator {}
                    p { class: "reports-footnote",
                        "Average satisfaction across the period: {metrics.satisfaction:.1}/5.0"
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
    fn satisfaction_scales_to_percent() {
        assert_eq!(satisfaction_percent(5.0), 100);
        assert_eq!(satisfaction_percent(2.5), 50);
        assert_eq!(satisfaction_percent(0.0), 0);
        // Out-of-range input clamps instead of overflowing.
        assert_eq!(satisfaction_percent(7.0), 100);
    }

    #[test]
    fn trend_bars_scale_against_the_best_month() {
        assert_eq!(trend_percent(94, 94), 100);
        assert_eq!(trend_percent(47, 94), 50);
        assert_eq!(trend_percent(10, 0), 0);
    }
}
