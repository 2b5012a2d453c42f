use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct CreateAppointmentInput {
    pub title: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy)]
pub struct GetCalendarMonthInput {
    pub year: i32,
    pub month: u32,
}
