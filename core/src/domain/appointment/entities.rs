use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{appointment::value_objects::CreateAppointmentInput, common::generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Appointment {
    pub id: Uuid,
    pub title: String,
    pub doctor: String,
    pub date: NaiveDate,
    /// Free-form time of day as entered, e.g. "10:00 AM".
    pub time: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(input: CreateAppointmentInput) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            title: input.title,
            doctor: input.doctor,
            date: input.date,
            time: input.time,
            location: input.location,
            created_at: now,
        }
    }
}

/// One month of the appointment calendar, laid out Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// e.g. "January 2024"
    pub label: String,
    /// Empty cells before day 1.
    pub leading_blank_days: u32,
    pub days_in_month: u32,
    pub appointment_days: Vec<u32>,
}
