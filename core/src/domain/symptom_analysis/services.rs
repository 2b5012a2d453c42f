use tracing::{info, instrument};

use crate::domain::{
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health_report::ports::HealthReportRepository,
    symptom_analysis::{
        entities::{AnalysisResult, SymptomRequest},
        extraction::analysis_or_fallback,
        ports::{LLMClient, SymptomAnalysisService},
        prompt::{MEDICAL_SYSTEM_PROMPT, build_user_prompt},
    },
};

impl<LLM, AP, HR> SymptomAnalysisService for Service<LLM, AP, HR>
where
    LLM: LLMClient,
    AP: AppointmentRepository,
    HR: HealthReportRepository,
{
    #[instrument(skip(self, input), fields(category = %input.category))]
    async fn analyze_symptoms(&self, input: SymptomRequest) -> Result<AnalysisResult, CoreError> {
        info!(
            age = input.age,
            duration = input.duration,
            duration_unit = %input.duration_unit,
            "Analyzing symptoms"
        );

        let user_prompt = build_user_prompt(&input);

        // Provider errors (rate limit, quota, transport) propagate; only the
        // content of a successful completion is subject to the fallback.
        let completion = self
            .llm_client
            .generate_chat(MEDICAL_SYSTEM_PROMPT.to_string(), user_prompt)
            .await?;

        let result = analysis_or_fallback(&completion);

        info!(
            severity = result.severity.as_str(),
            is_emergency = result.is_emergency,
            "Analysis complete"
        );

        Ok(result)
    }
}
