use axum::extract::State;
use carepulse_core::domain::appointment::{
    entities::Appointment, ports::AppointmentService, value_objects::CreateAppointmentInput,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    appointment::validators::CreateAppointmentValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateAppointmentResponse {
    pub data: Appointment,
}

#[utoipa::path(
    post,
    path = "",
    tag = "appointment",
    summary = "Schedule appointment",
    description = "Adds an appointment to the calendar. Every field is required.",
    request_body = CreateAppointmentValidator,
    responses(
        (status = 201, body = CreateAppointmentResponse, description = "Appointment scheduled"),
        (status = 400, description = "Missing field or invalid date")
    )
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateAppointmentValidator>,
) -> Result<Response<CreateAppointmentResponse>, ApiError> {
    let date = NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("invalid date: {}", payload.date)))?;

    let appointment = state
        .service
        .create_appointment(CreateAppointmentInput {
            title: payload.title,
            doctor: payload.doctor,
            date,
            time: payload.time,
            location: payload.location,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateAppointmentResponse { data: appointment }))
}
