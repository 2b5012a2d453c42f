pub mod appointment;
pub mod emergency;
pub mod health;
pub mod health_report;
pub mod server;
pub mod symptom_analysis;
