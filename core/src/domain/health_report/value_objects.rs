use crate::domain::symptom_analysis::entities::{Severity, SymptomCategory};

#[derive(Debug, Clone, Default)]
pub struct HealthReportFilter {
    pub category: Option<SymptomCategory>,
    pub severity: Option<Severity>,
}
