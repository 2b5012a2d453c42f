use tracing::info;

use crate::{
    domain::common::{CarePulseConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        appointment::InMemoryAppointmentRepository,
        health_report::InMemoryHealthReportRepository, llm::GatewayLLMClient,
    },
};

pub type CarePulseService =
    Service<GatewayLLMClient, InMemoryAppointmentRepository, InMemoryHealthReportRepository>;

pub async fn create_service(config: CarePulseConfig) -> Result<CarePulseService, CoreError> {
    if url::Url::parse(&config.llm.base_url).is_err() {
        return Err(CoreError::ConfigurationError(format!(
            "invalid LLM base URL: {}",
            config.llm.base_url
        )));
    }

    let llm_client = GatewayLLMClient::new(&config.llm);

    let (appointment_repository, health_report_repository) = if config.seed_sample_data {
        (
            InMemoryAppointmentRepository::with_sample_data(),
            InMemoryHealthReportRepository::with_sample_data(),
        )
    } else {
        (
            InMemoryAppointmentRepository::default(),
            InMemoryHealthReportRepository::default(),
        )
    };

    info!(
        model = %config.llm.model,
        llm_endpoint = %llm_client.endpoint(),
        seeded = config.seed_sample_data,
        "CarePulse service ready"
    );

    Ok(Service::new(
        llm_client,
        appointment_repository,
        health_report_repository,
    ))
}
