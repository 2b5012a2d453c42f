use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    appointment::{
        entities::{Appointment, CalendarMonth},
        value_objects::{CreateAppointmentInput, GetCalendarMonthInput},
    },
    common::entities::app_errors::CoreError,
};

/// Storage for appointment records
#[cfg_attr(test, mockall::automock)]
pub trait AppointmentRepository: Send + Sync {
    fn create(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    /// Returns appointments ordered by date.
    fn list(&self) -> impl Future<Output = Result<Vec<Appointment>, CoreError>> + Send;

    /// Returns `false` when no appointment has this id.
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AppointmentService: Send + Sync {
    fn create_appointment(
        &self,
        input: CreateAppointmentInput,
    ) -> impl Future<Output = Result<Appointment, CoreError>> + Send;

    fn list_appointments(&self) -> impl Future<Output = Result<Vec<Appointment>, CoreError>> + Send;

    fn cancel_appointment(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_calendar_month(
        &self,
        input: GetCalendarMonthInput,
    ) -> impl Future<Output = Result<CalendarMonth, CoreError>> + Send;
}
