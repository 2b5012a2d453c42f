use chrono::{Datelike, Months, NaiveDate};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    appointment::{
        entities::{Appointment, CalendarMonth},
        ports::{AppointmentRepository, AppointmentService},
        value_objects::{CreateAppointmentInput, GetCalendarMonthInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    health_report::ports::HealthReportRepository,
    symptom_analysis::ports::LLMClient,
};

impl<LLM, AP, HR> AppointmentService for Service<LLM, AP, HR>
where
    LLM: LLMClient,
    AP: AppointmentRepository,
    HR: HealthReportRepository,
{
    #[instrument(skip(self, input), fields(date = %input.date))]
    async fn create_appointment(
        &self,
        input: CreateAppointmentInput,
    ) -> Result<Appointment, CoreError> {
        let appointment = self
            .appointment_repository
            .create(Appointment::new(input))
            .await?;

        info!(appointment_id = %appointment.id, "Appointment scheduled");
        Ok(appointment)
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>, CoreError> {
        self.appointment_repository.list().await
    }

    #[instrument(skip(self))]
    async fn cancel_appointment(&self, id: Uuid) -> Result<(), CoreError> {
        if !self.appointment_repository.delete(id).await? {
            return Err(CoreError::NotFound);
        }

        info!("Appointment cancelled");
        Ok(())
    }

    async fn get_calendar_month(
        &self,
        input: GetCalendarMonthInput,
    ) -> Result<CalendarMonth, CoreError> {
        let appointments = self.appointment_repository.list().await?;
        calendar_month(input.year, input.month, &appointments)
    }
}

/// Lays out a month grid and marks the days that carry an appointment.
pub fn calendar_month(
    year: i32,
    month: u32,
    appointments: &[Appointment],
) -> Result<CalendarMonth, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Invalid(format!("invalid month {year}-{month}")))?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| CoreError::Invalid(format!("month out of range {year}-{month}")))?;

    let mut appointment_days: Vec<u32> = appointments
        .iter()
        .filter(|appointment| appointment.date.year() == year && appointment.date.month() == month)
        .map(|appointment| appointment.date.day())
        .collect();
    appointment_days.sort_unstable();
    appointment_days.dedup();

    Ok(CalendarMonth {
        year,
        month,
        label: first.format("%B %Y").to_string(),
        leading_blank_days: first.weekday().num_days_from_sunday(),
        days_in_month: (next - first).num_days() as u32,
        appointment_days,
    })
}
