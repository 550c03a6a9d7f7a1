// Route table for the site API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    company_stats, create_company, create_project, dashboard_overview, financial_report,
    health_check, list_companies, list_members, list_projects, member_profile, status_progress,
    submit_lead, top_projects,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/api/send-lead", post(submit_lead))
        .route("/dashboard", get(dashboard_overview))
        .route("/dashboard/projects", get(list_projects).post(create_project))
        .route("/dashboard/companies", get(list_companies).post(create_company))
        .route("/dashboard/companies/:id/stats", get(company_stats))
        .route("/dashboard/reports", get(financial_report))
        .route("/dashboard/reports/top-projects", get(top_projects))
        .route("/dashboard/progress/:status", get(status_progress))
        .route("/members", get(list_members))
        .route("/members/:uuid", get(member_profile))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog_service::CatalogService;
    use crate::application::lead_notifier::{LeadNotification, LeadNotifier};
    use crate::application::lead_service::LeadService;
    use crate::application::report_service::ReportService;
    use crate::infrastructure::config::LeadSettings;
    use crate::infrastructure::mock_catalog::MockCatalog;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubNotifier {
        sent: Mutex<Vec<LeadNotification>>,
        fail: bool,
    }

    #[async_trait]
    impl LeadNotifier for StubNotifier {
        async fn notify(&self, notification: &LeadNotification) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push(notification.clone());
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(())
        }
    }

    fn app(notifier: Arc<StubNotifier>) -> Router {
        let catalog = Arc::new(MockCatalog::new());
        let state = Arc::new(AppState {
            lead_service: LeadService::new(notifier, LeadSettings::default()),
            report_service: ReportService::new(catalog.clone()),
            catalog_service: CatalogService::new(catalog),
        });
        app_router(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("handler should respond");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should read")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn maria() -> Value {
        json!({
            "name": "Maria",
            "email": "maria@x.com",
            "company": "Acme",
            "message": "Precisamos de um site"
        })
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let response = app(Arc::default())
            .oneshot(get("/healthz"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn lead_is_forwarded_once() {
        let notifier = Arc::new(StubNotifier::default());

        let (status, body) =
            send(app(notifier.clone()), post_json("/api/send-lead", maria())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "ok": true }));
        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].content.contains("Acme"));
        assert!(sent[0].content.contains("Maria"));
    }

    #[tokio::test]
    async fn webhook_failure_yields_ok_false() {
        let notifier = Arc::new(StubNotifier {
            fail: true,
            ..Default::default()
        });

        let (status, body) = send(app(notifier), post_json("/api/send-lead", maria())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["ok"], json!(false));
        assert_eq!(body["error"], json!("Falha ao enviar"));
    }

    #[tokio::test]
    async fn malformed_lead_is_a_client_error() {
        let notifier = Arc::new(StubNotifier::default());

        let (status, body) = send(
            app(notifier.clone()),
            post_json("/api/send-lead", json!({ "name": "Maria", "message": "Oi" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], json!(false));

        let request = Request::builder()
            .method("POST")
            .uri("/api/send-lead")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(app(notifier.clone()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn company_stats_for_known_and_unknown_ids() {
        let (status, body) = send(app(Arc::default()), get("/dashboard/companies/6/stats")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["projectCount"], json!(0));
        assert_eq!(body["margin"], json!(0.0));

        let (status, _) = send(app(Arc::default()), get("/dashboard/companies/404/stats")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn project_filters_from_query_string() {
        let (status, body) = send(
            app(Arc::default()),
            get("/dashboard/projects?tab=in-progress&category=dashboard"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let listings = body.as_array().unwrap();
        assert!(!listings.is_empty());
        for listing in listings {
            assert_eq!(listing["category"], json!("dashboard"));
            assert!(listing["progress"].as_u64().unwrap() < 100);
        }
    }

    #[tokio::test]
    async fn top_projects_respects_limit() {
        let (status, body) = send(
            app(Arc::default()),
            get("/dashboard/reports/top-projects?limit=3"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let projects = body.as_array().unwrap();
        assert_eq!(projects.len(), 3);
        let profits: Vec<f64> = projects.iter().map(|p| p["profit"].as_f64().unwrap()).collect();
        assert!(profits.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn bad_query_strings_answer_with_json() {
        for uri in [
            "/dashboard/projects?tab=bogus",
            "/dashboard/projects?category=spaceship",
            "/dashboard/reports/top-projects?limit=-1",
        ] {
            let response = app(Arc::default()).oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(
                response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
                "application/json",
                "{uri}"
            );

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body["ok"], json!(false), "{uri}");
            assert_eq!(body["error"], json!("Parâmetros de consulta inválidos"), "{uri}");
        }
    }

    #[tokio::test]
    async fn all_category_and_status_list_everything() {
        let (_, everything) = send(app(Arc::default()), get("/dashboard/projects")).await;
        let (status, body) = send(
            app(Arc::default()),
            get("/dashboard/projects?category=all&status=all"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 11);
        assert_eq!(body, everything);
    }

    #[tokio::test]
    async fn report_contains_every_section() {
        let (status, body) = send(app(Arc::default()), get("/dashboard/reports")).await;

        assert_eq!(status, StatusCode::OK);
        for key in ["totals", "categories", "companies", "topProjects", "trend"] {
            assert!(body.get(key).is_some(), "missing {key}");
        }
        assert!(body["topProjects"].as_array().unwrap().len() <= 5);

        let months = body["trend"]["months"].as_array().unwrap();
        assert!(!months.is_empty());
        for key in ["month", "activeProjects", "newProjects", "completedProjects"] {
            assert!(months[0].get(key).is_some(), "missing month field {key}");
        }
    }

    #[tokio::test]
    async fn progress_lookup() {
        let (status, body) = send(app(Arc::default()), get("/dashboard/progress/testing")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["progress"], json!(80));

        let (status, _) = send(app(Arc::default()), get("/dashboard/progress/finished")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn project_draft_is_validated_not_stored() {
        let draft = json!({
            "name": "Novo Site",
            "companyId": "2",
            "category": "landing-page",
            "monthlyRevenue": "800"
        });

        let (status, body) =
            send(app(Arc::default()), post_json("/dashboard/projects", draft)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["project"]["status"], json!("planning"));

        let (_, listing) = send(
            app(Arc::default()),
            get("/dashboard/projects?search=Novo%20Site"),
        )
        .await;
        assert!(listing.as_array().unwrap().is_empty());

        let (status, body) = send(
            app(Arc::default()),
            post_json("/dashboard/projects", json!({ "name": "Sem empresa" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], json!(false));
    }

    #[tokio::test]
    async fn member_profiles() {
        let (status, body) = send(app(Arc::default()), get("/members")).await;
        assert_eq!(status, StatusCode::OK);
        let uuid = body[0]["uuid"].as_str().unwrap().to_string();

        let (status, body) = send(app(Arc::default()), get(&format!("/members/{uuid}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["projects"].as_array().unwrap().is_empty());

        let (status, _) = send(app(Arc::default()), get("/members/nobody")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
