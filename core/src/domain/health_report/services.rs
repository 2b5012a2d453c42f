use crate::domain::{
    appointment::ports::AppointmentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health_report::{
        entities::{HealthReport, HealthReportSummary},
        ports::{HealthReportRepository, HealthReportService},
        value_objects::HealthReportFilter,
    },
    symptom_analysis::ports::LLMClient,
};

impl<LLM, AP, HR> HealthReportService for Service<LLM, AP, HR>
where
    LLM: LLMClient,
    AP: AppointmentRepository,
    HR: HealthReportRepository,
{
    async fn list_health_reports(
        &self,
        filter: HealthReportFilter,
    ) -> Result<Vec<HealthReport>, CoreError> {
        let reports = self.health_report_repository.list().await?;

        Ok(reports
            .into_iter()
            .filter(|report| filter.category.is_none_or(|category| report.category == category))
            .filter(|report| filter.severity.is_none_or(|severity| report.severity == severity))
            .collect())
    }

    async fn get_health_report_summary(&self) -> Result<HealthReportSummary, CoreError> {
        let reports = self.health_report_repository.list().await?;
        Ok(HealthReportSummary::from_reports(&reports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::symptom_analysis::entities::{Severity, SymptomCategory},
        infrastructure::{
            appointment::InMemoryAppointmentRepository,
            health_report::InMemoryHealthReportRepository,
        },
    };

    struct UnusedLLM;

    impl LLMClient for UnusedLLM {
        async fn generate_chat(&self, _: String, _: String) -> Result<String, CoreError> {
            Err(CoreError::InternalServerError)
        }
    }

    fn service() -> Service<UnusedLLM, InMemoryAppointmentRepository, InMemoryHealthReportRepository>
    {
        Service::new(
            UnusedLLM,
            InMemoryAppointmentRepository::default(),
            InMemoryHealthReportRepository::with_sample_data(),
        )
    }

    #[tokio::test]
    async fn test_sample_history_is_newest_first() {
        let reports = service()
            .list_health_reports(HealthReportFilter::default())
            .await
            .unwrap();

        assert_eq!(reports.len(), 5);
        assert!(reports.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[tokio::test]
    async fn test_filter_by_severity_and_category() {
        let service = service();

        let moderate = service
            .list_health_reports(HealthReportFilter {
                category: None,
                severity: Some(Severity::Moderate),
            })
            .await
            .unwrap();
        assert_eq!(moderate.len(), 2);

        let cardiac = service
            .list_health_reports(HealthReportFilter {
                category: Some(SymptomCategory::Cardiac),
                severity: None,
            })
            .await
            .unwrap();
        assert_eq!(cardiac.len(), 1);
        assert_eq!(cardiac[0].severity, Severity::Severe);
    }

    #[tokio::test]
    async fn test_summary_counts_by_severity() {
        let summary = service().get_health_report_summary().await.unwrap();

        assert_eq!(
            summary,
            HealthReportSummary {
                total_checks: 5,
                mild: 2,
                moderate: 2,
                severe: 1,
            }
        );
    }
}
