use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health_report::{
        entities::{HealthReport, HealthReportSummary},
        value_objects::HealthReportFilter,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthReportRepository: Send + Sync {
    fn create(
        &self,
        report: HealthReport,
    ) -> impl Future<Output = Result<HealthReport, CoreError>> + Send;

    /// Newest first.
    fn list(&self) -> impl Future<Output = Result<Vec<HealthReport>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthReportService: Send + Sync {
    fn list_health_reports(
        &self,
        filter: HealthReportFilter,
    ) -> impl Future<Output = Result<Vec<HealthReport>, CoreError>> + Send;

    fn get_health_report_summary(
        &self,
    ) -> impl Future<Output = Result<HealthReportSummary, CoreError>> + Send;
}
