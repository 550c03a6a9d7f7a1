// Report service - Aggregations over the catalog for the dashboard
use crate::application::catalog_repository::CatalogRepository;
use crate::domain::project::{growth, margin, Project, ProjectCategory, ProjectStatus};
use crate::domain::report::{
    CategoryStats, CompanyRanking, CompanyStats, DashboardOverview, FinancialReport, MonthlyTrend,
    ProjectProgress, RankedProject, Totals,
};
use std::sync::Arc;

pub const UNKNOWN_COMPANY: &str = "Empresa não encontrada";
const OVERVIEW_IN_PROGRESS: usize = 5;
const REPORT_TOP_PROJECTS: usize = 5;

/// Pure, synchronous aggregations. Everything is recomputed per call.
#[derive(Clone)]
pub struct ReportService {
    repository: Arc<dyn CatalogRepository>,
}

impl ReportService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub fn company_stats(&self, company_id: &str) -> CompanyStats {
        company_stats(self.repository.projects(), company_id)
    }

    /// Categories with at least one project, highest revenue first.
    pub fn category_breakdown(&self) -> Vec<CategoryStats> {
        category_breakdown(self.repository.projects())
    }

    pub fn top_projects_by_profit(&self, n: usize) -> Vec<RankedProject> {
        top_projects_by_profit(self.repository.projects(), n)
            .into_iter()
            .map(|p| self.rank(p))
            .collect()
    }

    pub fn progress_for_status(&self, status: ProjectStatus) -> u8 {
        status.progress()
    }

    pub fn totals(&self) -> Totals {
        let projects = self.repository.projects();
        let total_revenue: f64 = projects.iter().map(|p| p.monthly_revenue).sum();
        let total_cost: f64 = projects.iter().map(|p| p.server_cost).sum();
        let profit = total_revenue - total_cost;

        Totals {
            total_revenue,
            total_cost,
            profit,
            margin: margin(profit, total_revenue),
            project_count: projects.len(),
            active_project_count: projects.iter().filter(|p| p.is_active).count(),
            in_progress_count: projects.iter().filter(|p| p.status.is_in_progress()).count(),
            completed_count: projects.iter().filter(|p| p.status.is_completed()).count(),
            company_count: self.repository.companies().len(),
        }
    }

    /// Companies with at least one project, highest revenue first.
    pub fn company_ranking(&self) -> Vec<CompanyRanking> {
        let projects = self.repository.projects();
        let mut ranking: Vec<CompanyRanking> = self
            .repository
            .companies()
            .iter()
            .map(|c| CompanyRanking {
                company_id: c.id.clone(),
                company_name: c.name.clone(),
                stats: company_stats(projects, &c.id),
            })
            .filter(|r| r.stats.project_count > 0)
            .collect();

        ranking.sort_by(|a, b| b.stats.total_revenue.total_cmp(&a.stats.total_revenue));
        ranking
    }

    pub fn monthly_trend(&self) -> MonthlyTrend {
        let months = self.repository.monthly_reports().to_vec();

        let (revenue_growth, profit_growth) = match months.as_slice() {
            [.., previous, current] => (
                growth(current.revenue, previous.revenue),
                growth(current.profit, previous.profit),
            ),
            _ => (0.0, 0.0),
        };

        MonthlyTrend {
            months,
            revenue_growth,
            profit_growth,
        }
    }

    pub fn dashboard_overview(&self) -> DashboardOverview {
        let in_progress = self
            .repository
            .projects()
            .iter()
            .filter(|p| p.is_active && p.status.is_in_progress())
            .take(OVERVIEW_IN_PROGRESS)
            .map(|p| ProjectProgress {
                id: p.id.clone(),
                name: p.name.clone(),
                company_name: self.company_name(&p.company_id),
                status: p.status,
                status_label: p.status.label(),
                progress: p.status.progress(),
            })
            .collect();

        DashboardOverview {
            totals: self.totals(),
            in_progress,
            revenue_by_category: self.category_breakdown(),
        }
    }

    pub fn financial_report(&self) -> FinancialReport {
        FinancialReport {
            totals: self.totals(),
            categories: self.category_breakdown(),
            companies: self.company_ranking(),
            top_projects: self.top_projects_by_profit(REPORT_TOP_PROJECTS),
            trend: self.monthly_trend(),
        }
    }

    fn company_name(&self, company_id: &str) -> String {
        self.repository
            .company_name(company_id)
            .unwrap_or(UNKNOWN_COMPANY)
            .to_string()
    }

    fn rank(&self, project: &Project) -> RankedProject {
        RankedProject {
            id: project.id.clone(),
            name: project.name.clone(),
            company_name: self.company_name(&project.company_id),
            category: project.category,
            status: project.status,
            monthly_revenue: project.monthly_revenue,
            server_cost: project.server_cost,
            profit: project.profit(),
            margin: project.margin(),
        }
    }
}

pub fn company_stats(projects: &[Project], company_id: &str) -> CompanyStats {
    let owned: Vec<&Project> = projects
        .iter()
        .filter(|p| p.company_id == company_id)
        .collect();

    let total_revenue: f64 = owned.iter().map(|p| p.monthly_revenue).sum();
    let total_cost: f64 = owned.iter().map(|p| p.server_cost).sum();
    let profit = total_revenue - total_cost;

    CompanyStats {
        project_count: owned.len(),
        active_project_count: owned.iter().filter(|p| p.is_active).count(),
        total_revenue,
        total_cost,
        profit,
        margin: margin(profit, total_revenue),
    }
}

pub fn category_breakdown(projects: &[Project]) -> Vec<CategoryStats> {
    let mut stats: Vec<CategoryStats> = ProjectCategory::ALL
        .iter()
        .map(|&category| {
            let in_category = projects.iter().filter(|p| p.category == category);
            let (count, revenue, cost) = in_category.fold((0, 0.0, 0.0), |(n, r, c), p| {
                (n + 1, r + p.monthly_revenue, c + p.server_cost)
            });
            let profit = revenue - cost;

            CategoryStats {
                category,
                label: category.label(),
                project_count: count,
                revenue,
                cost,
                profit,
                margin: margin(profit, revenue),
            }
        })
        .filter(|s| s.project_count > 0)
        .collect();

    stats.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    stats
}

/// The `n` most profitable projects. `sort_by` is stable, so ties keep
/// catalog order.
pub fn top_projects_by_profit(projects: &[Project], n: usize) -> Vec<&Project> {
    let mut ranked: Vec<&Project> = projects.iter().collect();
    ranked.sort_by(|a, b| b.profit().total_cmp(&a.profit()));
    ranked.truncate(n);
    ranked
}
