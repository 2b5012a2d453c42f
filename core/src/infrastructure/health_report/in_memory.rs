use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health_report::{entities::HealthReport, ports::HealthReportRepository},
    symptom_analysis::entities::{Severity, SymptomCategory},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryHealthReportRepository {
    reports: Arc<RwLock<Vec<HealthReport>>>,
}

const SAMPLE_REPORTS: [((i32, u32, u32), SymptomCategory, Severity, &str, &str); 5] = [
    (
        (2024, 1, 15),
        SymptomCategory::Respiratory,
        Severity::Mild,
        "Mild cough and congestion",
        "Rest, stay hydrated, and monitor symptoms for 48 hours.",
    ),
    (
        (2024, 1, 10),
        SymptomCategory::General,
        Severity::Mild,
        "Mild headache and fatigue",
        "Ensure adequate sleep and reduce screen time.",
    ),
    (
        (2024, 1, 5),
        SymptomCategory::Digestive,
        Severity::Moderate,
        "Stomach discomfort after meals",
        "Consider dietary changes and consult a gastroenterologist if persists.",
    ),
    (
        (2023, 12, 28),
        SymptomCategory::Mental,
        Severity::Moderate,
        "Increased stress and anxiety",
        "Practice relaxation techniques and consider speaking with a counselor.",
    ),
    (
        (2023, 12, 20),
        SymptomCategory::Cardiac,
        Severity::Severe,
        "Occasional chest discomfort",
        "Immediate consultation with a cardiologist recommended.",
    ),
];

impl InMemoryHealthReportRepository {
    pub fn new(reports: Vec<HealthReport>) -> Self {
        Self {
            reports: Arc::new(RwLock::new(reports)),
        }
    }

    pub fn with_sample_data() -> Self {
        let reports = SAMPLE_REPORTS
            .iter()
            .filter_map(|((year, month, day), category, severity, symptoms, advice)| {
                Some(HealthReport::new(
                    NaiveDate::from_ymd_opt(*year, *month, *day)?,
                    *category,
                    *severity,
                    symptoms.to_string(),
                    advice.to_string(),
                ))
            })
            .collect();

        Self::new(reports)
    }
}

impl HealthReportRepository for InMemoryHealthReportRepository {
    async fn create(&self, report: HealthReport) -> Result<HealthReport, CoreError> {
        self.reports.write().await.push(report.clone());
        Ok(report)
    }

    async fn list(&self) -> Result<Vec<HealthReport>, CoreError> {
        let mut reports = self.reports.read().await.clone();
        reports.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(reports)
    }
}
