use axum::Json;
use carepulse_core::domain::emergency::{EmergencyGuide, emergency_guide};

#[utoipa::path(
    get,
    path = "",
    tag = "emergency",
    summary = "Emergency contacts",
    description = "Emergency numbers and the symptoms that call for immediate help.",
    responses(
        (status = 200, body = EmergencyGuide)
    )
)]
pub async fn get_emergency_contacts() -> Json<EmergencyGuide> {
    Json(emergency_guide())
}
