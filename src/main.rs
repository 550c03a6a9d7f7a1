// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::catalog_service::CatalogService;
use crate::application::lead_service::LeadService;
use crate::application::report_service::ReportService;
use crate::infrastructure::config::load_site_config;
use crate::infrastructure::mock_catalog::MockCatalog;
use crate::infrastructure::webhook_notifier::WebhookNotifier;
use crate::presentation::app_state::AppState;
use crate::presentation::router::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let site_config = load_site_config()?;
    let lead_settings = site_config.lead_settings()?;

    // Create adapters (infrastructure layer)
    let catalog = Arc::new(MockCatalog::new());
    let notifier = Arc::new(WebhookNotifier::new(lead_settings.webhook_url.clone()));

    // Create services (application layer)
    let lead_service = LeadService::new(notifier, lead_settings);
    let report_service = ReportService::new(catalog.clone());
    let catalog_service = CatalogService::new(catalog);

    // Create application state
    let state = Arc::new(AppState {
        lead_service,
        report_service,
        catalog_service,
    });

    // Build router (presentation layer)
    let router = app_router(state);

    // Start server
    let addr: SocketAddr = site_config
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address {}", site_config.bind_addr))?;
    tracing::info!("Starting consultancy-site service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
