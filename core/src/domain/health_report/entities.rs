use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    symptom_analysis::entities::{Severity, SymptomCategory},
};

/// A past symptom check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReport {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: SymptomCategory,
    pub severity: Severity,
    pub symptoms: String,
    pub advice: String,
}

impl HealthReport {
    pub fn new(
        date: NaiveDate,
        category: SymptomCategory,
        severity: Severity,
        symptoms: String,
        advice: String,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            date,
            category,
            severity,
            symptoms,
            advice,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthReportSummary {
    pub total_checks: usize,
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
}

impl HealthReportSummary {
    pub fn from_reports(reports: &[HealthReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |mut summary, report| {
                summary.total_checks += 1;
                match report.severity {
                    Severity::Mild => summary.mild += 1,
                    Severity::Moderate => summary.moderate += 1,
                    Severity::Severe => summary.severe += 1,
                }
                summary
            })
    }
}
