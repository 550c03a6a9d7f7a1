// Project domain model
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    LandingPage,
    Crm,
    Dashboard,
    MobileApp,
    ECommerce,
    Blog,
    Portfolio,
    Other,
}

impl ProjectCategory {
    /// Every category, in the order the dashboard lists them.
    pub const ALL: [ProjectCategory; 8] = [
        ProjectCategory::LandingPage,
        ProjectCategory::Crm,
        ProjectCategory::Dashboard,
        ProjectCategory::MobileApp,
        ProjectCategory::ECommerce,
        ProjectCategory::Blog,
        ProjectCategory::Portfolio,
        ProjectCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::LandingPage => "Landing Page",
            ProjectCategory::Crm => "CRM",
            ProjectCategory::Dashboard => "Dashboard",
            ProjectCategory::MobileApp => "App Mobile",
            ProjectCategory::ECommerce => "E-commerce",
            ProjectCategory::Blog => "Blog",
            ProjectCategory::Portfolio => "Portfólio",
            ProjectCategory::Other => "Outro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    Development,
    Testing,
    Deployed,
    Maintenance,
    Paused,
    Cancelled,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planejamento",
            ProjectStatus::Development => "Desenvolvimento",
            ProjectStatus::Testing => "Testes",
            ProjectStatus::Deployed => "Implantado",
            ProjectStatus::Maintenance => "Manutenção",
            ProjectStatus::Paused => "Pausado",
            ProjectStatus::Cancelled => "Cancelado",
        }
    }

    /// Fixed completion estimate (0-100) shown on progress bars.
    /// Not derived from any real tracking.
    pub fn progress(self) -> u8 {
        match self {
            ProjectStatus::Planning => 10,
            ProjectStatus::Development => 50,
            ProjectStatus::Testing => 80,
            ProjectStatus::Deployed | ProjectStatus::Maintenance => 100,
            ProjectStatus::Paused => 30,
            ProjectStatus::Cancelled => 0,
        }
    }

    pub fn is_in_progress(self) -> bool {
        matches!(
            self,
            ProjectStatus::Planning | ProjectStatus::Development | ProjectStatus::Testing
        )
    }

    pub fn is_completed(self) -> bool {
        self == ProjectStatus::Deployed
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
    pub company_id: String,
    pub monthly_revenue: f64,
    pub server_cost: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl Project {
    /// Monthly profit. Always derived, never stored.
    pub fn profit(&self) -> f64 {
        self.monthly_revenue - self.server_cost
    }

    pub fn margin(&self) -> f64 {
        margin(self.profit(), self.monthly_revenue)
    }
}

/// Profit as a percentage of revenue; 0 when there is no revenue.
pub fn margin(profit: f64, revenue: f64) -> f64 {
    if revenue == 0.0 {
        return 0.0;
    }
    (profit / revenue) * 100.0
}

/// Percentage change from `previous` to `current`; 0 when `previous` is 0.
pub fn growth(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    ((current - previous) / previous) * 100.0
}

#[cfg(test)]
pub(crate) fn sample_project(id: &str, company_id: &str, revenue: f64, cost: f64) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        description: String::new(),
        category: ProjectCategory::Other,
        status: ProjectStatus::Development,
        company_id: company_id.to_string(),
        monthly_revenue: revenue,
        server_cost: cost,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
        is_active: true,
    }
}
