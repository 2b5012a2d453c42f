pub mod get_health_report_summary;
pub mod list_health_reports;
