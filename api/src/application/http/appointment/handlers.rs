pub mod cancel_appointment;
pub mod create_appointment;
pub mod get_calendar_month;
pub mod list_appointments;
