use axum::extract::State;
use carepulse_core::domain::appointment::{entities::Appointment, ports::AppointmentService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListAppointmentsResponse {
    pub data: Vec<Appointment>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "appointment",
    summary = "List appointments",
    description = "Returns every scheduled appointment ordered by date.",
    responses(
        (status = 200, body = ListAppointmentsResponse)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Response<ListAppointmentsResponse>, ApiError> {
    let appointments = state
        .service
        .list_appointments()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListAppointmentsResponse { data: appointments }))
}
