use axum::{Json, extract::State};
use carepulse_core::domain::{
    intake::DISCLAIMER,
    symptom_analysis::entities::{DurationUnit, SymptomCategory},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryOption {
    pub value: SymptomCategory,
    pub label: String,
}

/// Public settings the intake form is built from.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub model: String,
    pub categories: Vec<CategoryOption>,
    pub duration_units: Vec<DurationUnit>,
    pub default_duration_unit: DurationUnit,
    pub disclaimer: String,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get client configuration",
    description = "Symptom categories, duration units and the disclaimer shown by the intake form.",
    responses(
        (status = 200, body = ClientConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(ClientConfig {
        model: state.args.llm.model.clone(),
        categories: SymptomCategory::ALL
            .into_iter()
            .map(|category| CategoryOption {
                value: category,
                label: category.label().to_string(),
            })
            .collect(),
        duration_units: DurationUnit::ALL.to_vec(),
        default_duration_unit: DurationUnit::default(),
        disclaimer: DISCLAIMER.to_string(),
    })
}
