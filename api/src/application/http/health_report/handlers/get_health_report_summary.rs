use axum::extract::State;
use carepulse_core::domain::health_report::{
    entities::HealthReportSummary, ports::HealthReportService,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/summary",
    tag = "health-report",
    summary = "Health report summary",
    description = "Number of symptom checks in total and per severity.",
    responses(
        (status = 200, body = HealthReportSummary)
    )
)]
pub async fn get_health_report_summary(
    State(state): State<AppState>,
) -> Result<Response<HealthReportSummary>, ApiError> {
    let summary = state
        .service
        .get_health_report_summary()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(summary))
}
