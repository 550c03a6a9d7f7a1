// Catalog service - Dashboard browsing, team profiles and create-dialog drafts
use crate::application::catalog_repository::CatalogRepository;
use crate::application::report_service::{company_stats, UNKNOWN_COMPANY};
use crate::domain::company::Company;
use crate::domain::member::Member;
use crate::domain::project::{Project, ProjectCategory, ProjectStatus};
use crate::domain::report::CompanyStats;
use chrono::NaiveDate;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectTab {
    #[default]
    All,
    Active,
    InProgress,
    Completed,
}

impl ProjectTab {
    fn admits(self, project: &Project) -> bool {
        match self {
            ProjectTab::All => true,
            ProjectTab::Active => project.is_active,
            ProjectTab::InProgress => project.status.is_in_progress(),
            ProjectTab::Completed => project.status.is_completed(),
        }
    }
}

/// Dashboard project filters. `all` (or an empty value) for category or
/// status means no filter, as the dashboard's select boxes send it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "all_or_value")]
    pub category: Option<ProjectCategory>,
    #[serde(default, deserialize_with = "all_or_value")]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub tab: ProjectTab,
}

fn all_or_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => T::deserialize(value.into_deserializer()).map(Some),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    #[serde(flatten)]
    pub project: Project,
    pub company_name: String,
    pub category_label: &'static str,
    pub status_label: &'static str,
    pub progress: u8,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListing {
    #[serde(flatten)]
    pub company: Company,
    pub stats: CompanyStats,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(flatten)]
    pub member: Member,
    pub projects: Vec<Project>,
}

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("Campo obrigatório não informado: {0}")]
    MissingField(&'static str),

    #[error("Empresa não encontrada: {0}")]
    UnknownCompany(String),

    #[error("Valor inválido em {0}: informe um número não negativo")]
    InvalidAmount(&'static str),

    #[error("Data de início inválida: {0}")]
    InvalidDate(String),
}

/// "New project" dialog payload. Amounts arrive as free text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProjectCategory>,
    pub status: Option<ProjectStatus>,
    pub company_id: Option<String>,
    pub monthly_revenue: Option<String>,
    pub server_cost: Option<String>,
    pub start_date: Option<String>,
}

/// "New company" dialog payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub fn search_projects(&self, filter: &ProjectFilter) -> Vec<ProjectListing> {
        let term = filter
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase();

        self.repository
            .projects()
            .iter()
            .filter(|p| filter.category.is_none_or(|c| p.category == c))
            .filter(|p| filter.status.is_none_or(|s| p.status == s))
            .filter(|p| filter.tab.admits(p))
            .filter_map(|p| {
                let company_name = self.company_name(&p.company_id);
                let matches = term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || company_name.to_lowercase().contains(&term);

                matches.then(|| ProjectListing {
                    project: p.clone(),
                    company_name,
                    category_label: p.category.label(),
                    status_label: p.status.label(),
                    progress: p.status.progress(),
                    profit: p.profit(),
                })
            })
            .collect()
    }

    pub fn search_companies(&self, term: Option<&str>) -> Vec<CompanyListing> {
        let term = term.map(str::trim).unwrap_or_default();
        let projects = self.repository.projects();

        self.repository
            .companies()
            .iter()
            .filter(|c| c.matches(term))
            .map(|c| CompanyListing {
                company: c.clone(),
                stats: company_stats(projects, &c.id),
                projects: projects
                    .iter()
                    .filter(|p| p.company_id == c.id)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.repository.company(id)
    }

    pub fn members(&self) -> &[Member] {
        self.repository.members()
    }

    pub fn member(&self, uuid: &str) -> Option<MemberProfile> {
        let member = self.repository.members().iter().find(|m| m.uuid == uuid)?;
        let projects = self
            .repository
            .projects()
            .iter()
            .filter(|p| member.worked_on(&p.id))
            .cloned()
            .collect();

        Some(MemberProfile {
            member: member.clone(),
            projects,
        })
    }

    /// Validate a new project. Nothing is stored; the preview is what the
    /// dialog would have saved.
    pub fn preview_project(
        &self,
        draft: ProjectDraft,
        today: NaiveDate,
    ) -> Result<Project, DraftError> {
        let name = required(draft.name, "name")?;
        let company_id = required(draft.company_id, "companyId")?;
        let category = draft.category.ok_or(DraftError::MissingField("category"))?;

        if self.repository.company(&company_id).is_none() {
            return Err(DraftError::UnknownCompany(company_id));
        }

        let start_date = match draft.start_date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| DraftError::InvalidDate(raw.to_string()))?,
        };

        Ok(Project {
            id: String::new(),
            name,
            description: draft.description.unwrap_or_default().trim().to_string(),
            category,
            status: draft.status.unwrap_or(ProjectStatus::Planning),
            company_id,
            monthly_revenue: parse_amount(draft.monthly_revenue.as_deref(), "monthlyRevenue")?,
            server_cost: parse_amount(draft.server_cost.as_deref(), "serverCost")?,
            start_date,
            end_date: None,
            is_active: true,
        })
    }

    pub fn preview_company(
        &self,
        draft: CompanyDraft,
        today: NaiveDate,
    ) -> Result<Company, DraftError> {
        let name = required(draft.name, "name")?;
        let email = required(draft.email, "email")?;

        Ok(Company {
            id: String::new(),
            name,
            email,
            phone: draft.phone.unwrap_or_default().trim().to_string(),
            website: draft
                .website
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty()),
            created_at: today,
        })
    }

    fn company_name(&self, company_id: &str) -> String {
        self.repository
            .company_name(company_id)
            .unwrap_or(UNKNOWN_COMPANY)
            .to_string()
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DraftError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(DraftError::MissingField(field))
}

/// Blank or unparseable input counts as zero, like the dialog does.
fn parse_amount(raw: Option<&str>, field: &'static str) -> Result<f64, DraftError> {
    let amount = raw
        .map(|r| r.trim().replace(',', "."))
        .and_then(|r| r.parse::<f64>().ok())
        .filter(|a| a.is_finite())
        .unwrap_or(0.0);

    if amount < 0.0 {
        return Err(DraftError::InvalidAmount(field));
    }
    Ok(amount)
}
