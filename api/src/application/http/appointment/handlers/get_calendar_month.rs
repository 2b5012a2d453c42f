use axum::extract::{Path, State};
use carepulse_core::domain::appointment::{
    entities::CalendarMonth, ports::AppointmentService, value_objects::GetCalendarMonthInput,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/calendar/{year}/{month}",
    tag = "appointment",
    summary = "Get calendar month",
    description = "Month grid (Sunday first) with the days that carry an appointment.",
    params(
        ("year" = i32, Path, description = "Year, e.g. 2024"),
        ("month" = u32, Path, description = "Month number, 1 to 12"),
    ),
    responses(
        (status = 200, body = CalendarMonth),
        (status = 400, description = "Invalid month")
    )
)]
pub async fn get_calendar_month(
    Path((year, month)): Path<(i32, u32)>,
    State(state): State<AppState>,
) -> Result<Response<CalendarMonth>, ApiError> {
    let calendar = state
        .service
        .get_calendar_month(GetCalendarMonthInput { year, month })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(calendar))
}
