use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    appointment::{
        entities::Appointment, ports::AppointmentRepository,
        value_objects::CreateAppointmentInput,
    },
    common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<Vec<Appointment>>>,
}

const SAMPLE_APPOINTMENTS: [(&str, &str, (i32, u32, u32), &str, &str); 3] = [
    (
        "Annual Checkup",
        "Dr. Sarah Johnson",
        (2024, 1, 25),
        "10:00 AM",
        "City Medical Center",
    ),
    (
        "Dental Cleaning",
        "Dr. Michael Chen",
        (2024, 2, 1),
        "2:30 PM",
        "Smile Dental Clinic",
    ),
    (
        "Follow-up Consultation",
        "Dr. Emily Brown",
        (2024, 2, 10),
        "11:00 AM",
        "Health First Clinic",
    ),
];

impl InMemoryAppointmentRepository {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Arc::new(RwLock::new(appointments)),
        }
    }

    pub fn with_sample_data() -> Self {
        let appointments = SAMPLE_APPOINTMENTS
            .iter()
            .filter_map(|(title, doctor, (year, month, day), time, location)| {
                let date = NaiveDate::from_ymd_opt(*year, *month, *day)?;
                Some(Appointment::new(CreateAppointmentInput {
                    title: title.to_string(),
                    doctor: doctor.to_string(),
                    date,
                    time: time.to_string(),
                    location: location.to_string(),
                }))
            })
            .collect();

        Self::new(appointments)
    }
}

impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, CoreError> {
        self.appointments.write().await.push(appointment.clone());
        Ok(appointment)
    }

    async fn list(&self) -> Result<Vec<Appointment>, CoreError> {
        let mut appointments = self.appointments.read().await.clone();
        appointments.sort_by_key(|appointment| (appointment.date, appointment.created_at));
        Ok(appointments)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CoreError> {
        let mut appointments = self.appointments.write().await;
        let before = appointments.len();
        appointments.retain(|appointment| appointment.id != id);
        Ok(appointments.len() != before)
    }
}
