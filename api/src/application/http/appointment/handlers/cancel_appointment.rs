use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use carepulse_core::domain::{
    appointment::ports::AppointmentService, common::entities::app_errors::CoreError,
};
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    delete,
    path = "/{appointment_id}",
    tag = "appointment",
    summary = "Cancel appointment",
    params(
        ("appointment_id" = Uuid, Path, description = "Appointment ID"),
    ),
    responses(
        (status = 204, description = "Appointment cancelled"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn cancel_appointment(
    Path(appointment_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .cancel_appointment(appointment_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Appointment not found".to_string()),
            other => ApiError::from(other),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
