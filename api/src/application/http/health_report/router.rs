use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_health_report_summary::{__path_get_health_report_summary, get_health_report_summary},
    list_health_reports::{__path_list_health_reports, list_health_reports},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_health_reports, get_health_report_summary))]
pub struct HealthReportApiDoc;

pub fn health_report_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health-reports", state.args.server.root_path),
            get(list_health_reports),
        )
        .route(
            &format!("{}/health-reports/summary", state.args.server.root_path),
            get(get_health_report_summary),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::application::http::test::test_server;

    #[tokio::test]
    async fn test_reports_are_newest_first() {
        let server = test_server().await;

        let response = server.get("/health-reports").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let reports = response.json::<Value>()["data"].as_array().unwrap().clone();
        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0]["date"], "2024-01-15");
        assert_eq!(reports[4]["severity"], "severe");
    }

    #[tokio::test]
    async fn test_filters_by_severity_and_category() {
        let server = test_server().await;

        let mild = server
            .get("/health-reports")
            .add_query_param("severity", "mild")
            .await
            .json::<Value>();
        assert_eq!(mild["data"].as_array().unwrap().len(), 2);

        let cardiac = server
            .get("/health-reports")
            .add_query_param("category", "cardiac")
            .await
            .json::<Value>();
        assert_eq!(cardiac["data"][0]["symptoms"], "Occasional chest discomfort");

        let unknown = server
            .get("/health-reports")
            .add_query_param("severity", "critical")
            .await;
        assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_summary_counts_severities() {
        let server = test_server().await;

        let summary = server.get("/health-reports/summary").await.json::<Value>();

        assert_eq!(
            summary,
            json!({ "total_checks": 5, "mild": 2, "moderate": 2, "severe": 1 })
        );
    }
}
