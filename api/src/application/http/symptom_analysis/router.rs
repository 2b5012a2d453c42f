use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_symptoms::{__path_analyze_symptoms, analyze_symptoms};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(analyze_symptoms))]
pub struct SymptomAnalysisApiDoc;

pub fn symptom_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze-symptoms", state.args.server.root_path),
        post(analyze_symptoms),
    )
}
