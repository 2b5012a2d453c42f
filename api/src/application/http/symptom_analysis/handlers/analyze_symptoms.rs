use axum::extract::State;
use carepulse_core::domain::symptom_analysis::{
    entities::{AnalysisResult, SymptomRequest},
    ports::SymptomAnalysisService,
};
use tracing::error;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, JsonBody},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "",
    tag = "symptom-analysis",
    summary = "Analyze symptoms",
    description = "Sends the symptom description to the language model once and returns its assessment. When the model reply holds no usable JSON object a fixed conservative assessment is returned instead.",
    request_body = SymptomRequest,
    responses(
        (status = 200, body = AnalysisResult, description = "Assessment of the reported symptoms"),
        (status = 400, description = "Malformed request body"),
        (status = 402, description = "Model quota exhausted"),
        (status = 429, description = "Model rate limit exceeded"),
        (status = 500, description = "Model call failed")
    )
)]
pub async fn analyze_symptoms(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SymptomRequest>,
) -> Result<Response<AnalysisResult>, ApiError> {
    let result = state
        .service
        .analyze_symptoms(payload)
        .await
        .map_err(|e| {
            error!("Symptom analysis failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(result))
}
