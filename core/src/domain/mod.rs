pub mod appointment;
pub mod common;
pub mod emergency;
pub mod health_report;
pub mod intake;
pub mod session;
pub mod symptom_analysis;
