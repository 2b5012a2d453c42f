use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_emergency_contacts::{
    __path_get_emergency_contacts, get_emergency_contacts,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_emergency_contacts))]
pub struct EmergencyApiDoc;

pub fn emergency_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/emergency-contacts", state.args.server.root_path),
        get(get_emergency_contacts),
    )
}
