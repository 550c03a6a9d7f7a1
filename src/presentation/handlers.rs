// HTTP request handlers
use crate::application::catalog_service::{CompanyDraft, ProjectDraft, ProjectFilter};
use crate::domain::lead::LeadRequest;
use crate::domain::project::ProjectStatus;
use crate::infrastructure::http_response::{ApiError, INVALID_BODY, INVALID_QUERY};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const DEFAULT_TOP_PROJECTS: usize = 5;

#[derive(Deserialize)]
pub struct TopProjectsQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct CompanySearchQuery {
    pub search: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Contact form submission from the landing page
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Unreadable lead payload: {}", e.body_text());
        ApiError::BadRequest(INVALID_BODY.to_string())
    })?;

    state.lead_service.submit(request).await?;
    Ok(Json(json!({ "ok": true })))
}

pub async fn dashboard_overview(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.report_service.dashboard_overview())
}

pub async fn list_projects(
    query: Result<Query<ProjectFilter>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(filter) = query.map_err(bad_query)?;
    Ok(Json(state.catalog_service.search_projects(&filter)))
}

/// "New project" dialog. Validated, echoed back, not stored.
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProjectDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = payload.map_err(bad_body)?;
    let project = state
        .catalog_service
        .preview_project(draft, Utc::now().date_naive())?;

    tracing::info!(name = %project.name, "Project draft accepted (not persisted)");
    Ok((StatusCode::CREATED, Json(json!({ "ok": true, "project": project }))))
}

pub async fn list_companies(
    query: Result<Query<CompanySearchQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(bad_query)?;
    Ok(Json(state.catalog_service.search_companies(query.search.as_deref())))
}

/// "New company" dialog. Validated, echoed back, not stored.
pub async fn create_company(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompanyDraft>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(draft) = payload.map_err(bad_body)?;
    let company = state
        .catalog_service
        .preview_company(draft, Utc::now().date_naive())?;

    tracing::info!(name = %company.name, "Company draft accepted (not persisted)");
    Ok((StatusCode::CREATED, Json(json!({ "ok": true, "company": company }))))
}

pub async fn company_stats(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    if state.catalog_service.company(&id).is_none() {
        return Err(ApiError::NotFound("Empresa não encontrada"));
    }
    Ok(Json(state.report_service.company_stats(&id)))
}

pub async fn financial_report(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.report_service.financial_report())
}

pub async fn top_projects(
    query: Result<Query<TopProjectsQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query.map_err(bad_query)?;
    let limit = query.limit.unwrap_or(DEFAULT_TOP_PROJECTS);
    Ok(Json(state.report_service.top_projects_by_profit(limit)))
}

pub async fn status_progress(
    State(state): State<Arc<AppState>>,
    status: Result<Path<ProjectStatus>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(status) = status.map_err(|_| ApiError::NotFound("Status desconhecido"))?;
    Ok(Json(json!({
        "status": status,
        "label": status.label(),
        "progress": state.report_service.progress_for_status(status),
    })))
}

pub async fn list_members(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog_service.members().to_vec())
}

pub async fn member_profile(
    Path(uuid): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .catalog_service
        .member(&uuid)
        .map(Json)
        .ok_or(ApiError::NotFound("Membro não encontrado"))
}

fn bad_query(rejection: QueryRejection) -> ApiError {
    tracing::warn!("Rejected query string: {}", rejection.body_text());
    ApiError::BadRequest(INVALID_QUERY.to_string())
}

fn bad_body(rejection: JsonRejection) -> ApiError {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    ApiError::BadRequest(INVALID_BODY.to_string())
}
