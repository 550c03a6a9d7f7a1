// Report aggregates - derived on every request, never stored
use super::project::{ProjectCategory, ProjectStatus};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub project_count: usize,
    pub active_project_count: usize,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub margin: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRanking {
    pub company_id: String,
    pub company_name: String,
    #[serde(flatten)]
    pub stats: CompanyStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: ProjectCategory,
    pub label: &'static str,
    pub project_count: usize,
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub margin: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub margin: f64,
    pub project_count: usize,
    pub active_project_count: usize,
    pub in_progress_count: usize,
    pub completed_count: usize,
    pub company_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProject {
    pub id: String,
    pub name: String,
    pub company_name: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub monthly_revenue: f64,
    pub server_cost: f64,
    pub profit: f64,
    pub margin: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub id: String,
    pub name: String,
    pub company_name: String,
    pub status: ProjectStatus,
    pub status_label: &'static str,
    pub progress: u8,
}

/// One month of company-wide financial history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub month: String,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub active_projects: usize,
    pub new_projects: usize,
    pub completed_projects: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub months: Vec<MonthlyReport>,
    pub revenue_growth: f64,
    pub profit_growth: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub totals: Totals,
    pub in_progress: Vec<ProjectProgress>,
    pub revenue_by_category: Vec<CategoryStats>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub totals: Totals,
    pub categories: Vec<CategoryStats>,
    pub companies: Vec<CompanyRanking>,
    pub top_projects: Vec<RankedProject>,
    pub trend: MonthlyTrend,
}
