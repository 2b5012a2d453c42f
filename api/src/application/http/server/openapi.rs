use utoipa::OpenApi;

use crate::application::http::{
    appointment::router::AppointmentApiDoc,
    emergency::router::EmergencyApiDoc,
    health::__path_live,
    health_report::router::HealthReportApiDoc,
    server::config::__path_get_config,
    symptom_analysis::router::SymptomAnalysisApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CarePulse API"
    ),
    paths(live, get_config),
    nest(
        (path = "/analyze-symptoms", api = SymptomAnalysisApiDoc),
        (path = "/appointments", api = AppointmentApiDoc),
        (path = "/health-reports", api = HealthReportApiDoc),
        (path = "/emergency-contacts", api = EmergencyApiDoc),
    )
)]
pub struct ApiDoc;
