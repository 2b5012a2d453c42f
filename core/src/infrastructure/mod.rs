pub mod appointment;
pub mod health_report;
pub mod identity;
pub mod llm;
pub mod relay;
