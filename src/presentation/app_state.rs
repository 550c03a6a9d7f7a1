// Application state for HTTP handlers
use crate::application::catalog_service::CatalogService;
use crate::application::lead_service::LeadService;
use crate::application::report_service::ReportService;

#[derive(Clone)]
pub struct AppState {
    pub lead_service: LeadService,
    pub report_service: ReportService,
    pub catalog_service: CatalogService,
}
