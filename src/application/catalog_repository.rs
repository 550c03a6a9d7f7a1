// Repository trait for the company/project catalog
use crate::domain::company::Company;
use crate::domain::member::Member;
use crate::domain::project::Project;
use crate::domain::report::MonthlyReport;

/// Read-only access to the catalog records. Implementations are fixed at
/// start-up; callers never mutate what they get back.
pub trait CatalogRepository: Send + Sync {
    /// All projects, in catalog order
    fn projects(&self) -> &[Project];

    /// All client companies, in catalog order
    fn companies(&self) -> &[Company];

    /// Team members shown on the landing page
    fn members(&self) -> &[Member];

    /// Monthly financial history, oldest first
    fn monthly_reports(&self) -> &[MonthlyReport];

    fn company(&self, id: &str) -> Option<&Company> {
        self.companies().iter().find(|c| c.id == id)
    }

    fn company_name(&self, id: &str) -> Option<&str> {
        self.company(id).map(|c| c.name.as_str())
    }
}
