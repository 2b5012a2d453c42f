use crate::domain::{
    appointment::ports::AppointmentRepository, health_report::ports::HealthReportRepository,
    symptom_analysis::ports::LLMClient,
};

/// Application service. Each domain module implements its service trait on it.
#[derive(Clone)]
pub struct Service<LLM, AP, HR>
where
    LLM: LLMClient,
    AP: AppointmentRepository,
    HR: HealthReportRepository,
{
    pub(crate) llm_client: LLM,
    pub(crate) appointment_repository: AP,
    pub(crate) health_report_repository: HR,
}

impl<LLM, AP, HR> Service<LLM, AP, HR>
where
    LLM: LLMClient,
    AP: AppointmentRepository,
    HR: HealthReportRepository,
{
    pub fn new(llm_client: LLM, appointment_repository: AP, health_report_repository: HR) -> Self {
        Self {
            llm_client,
            appointment_repository,
            health_report_repository,
        }
    }
}
