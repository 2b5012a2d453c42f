use axum::{
    Router,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    cancel_appointment::{__path_cancel_appointment, cancel_appointment},
    create_appointment::{__path_create_appointment, create_appointment},
    get_calendar_month::{__path_get_calendar_month, get_calendar_month},
    list_appointments::{__path_list_appointments, list_appointments},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_appointment,
    list_appointments,
    cancel_appointment,
    get_calendar_month
))]
pub struct AppointmentApiDoc;

pub fn appointment_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/appointments"),
            get(list_appointments).post(create_appointment),
        )
        .route(
            &format!("{root_path}/appointments/{{appointment_id}}"),
            delete(cancel_appointment),
        )
        .route(
            &format!("{root_path}/appointments/calendar/{{year}}/{{month}}"),
            get(get_calendar_month),
        )
}
