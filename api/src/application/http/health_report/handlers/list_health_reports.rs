use axum::extract::{Query, State};
use carepulse_core::domain::{
    health_report::{
        entities::HealthReport, ports::HealthReportService, value_objects::HealthReportFilter,
    },
    symptom_analysis::entities::{Severity, SymptomCategory},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HealthReportQuery {
    pub category: Option<SymptomCategory>,
    pub severity: Option<Severity>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListHealthReportsResponse {
    pub data: Vec<HealthReport>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health-report",
    summary = "List health reports",
    description = "Past symptom checks, newest first, optionally filtered by category and severity.",
    params(HealthReportQuery),
    responses(
        (status = 200, body = ListHealthReportsResponse),
        (status = 400, description = "Unknown category or severity")
    )
)]
pub async fn list_health_reports(
    State(state): State<AppState>,
    query: Result<Query<HealthReportQuery>, axum::extract::rejection::QueryRejection>,
) -> Result<Response<ListHealthReportsResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let reports = state
        .service
        .list_health_reports(HealthReportFilter {
            category: query.category,
            severity: query.severity,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListHealthReportsResponse { data: reports }))
}
