use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAppointmentValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "doctor is required"))]
    pub doctor: String,

    /// `YYYY-MM-DD`
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,

    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
}
