use std::fmt;

use thiserror::Error;

use crate::domain::symptom_analysis::entities::{DurationUnit, SymptomRequest};

pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MAX_AGE: i32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Description,
    Age,
    Duration,
    DurationUnit,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormField::Category => "symptom category",
            FormField::Description => "symptom description",
            FormField::Age => "age",
            FormField::Duration => "duration",
            FormField::DurationUnit => "duration unit",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationNotice {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please provide a more detailed symptom description")]
    DescriptionTooShort,

    #[error("Please enter a valid {field}")]
    InvalidField { field: FormField },
}

/// Raw field values as typed into the intake form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomForm {
    pub category: String,
    pub description: String,
    pub age: String,
    pub duration: String,
    pub duration_unit: String,
}

impl Default for SymptomForm {
    fn default() -> Self {
        Self {
            category: String::new(),
            description: String::new(),
            age: String::new(),
            duration: String::new(),
            duration_unit: DurationUnit::default().as_str().to_string(),
        }
    }
}

impl SymptomForm {
    /// Checks the form and builds the request to send. Nothing leaves the
    /// client unless this succeeds.
    pub fn validate(&self) -> Result<SymptomRequest, ValidationNotice> {
        let category = self.category.trim();
        let description = self.description.trim();
        let age = self.age.trim();
        let duration = self.duration.trim();
        let duration_unit = self.duration_unit.trim();

        if [category, description, age, duration, duration_unit]
            .iter()
            .any(|value| value.is_empty())
        {
            return Err(ValidationNotice::MissingFields);
        }

        if description.chars().count() < MIN_DESCRIPTION_CHARS {
            return Err(ValidationNotice::DescriptionTooShort);
        }

        let invalid = |field| ValidationNotice::InvalidField { field };

        Ok(SymptomRequest {
            category: category.parse().map_err(|_| invalid(FormField::Category))?,
            description: description.to_string(),
            age: age
                .parse::<i32>()
                .ok()
                .filter(|age| (0..=MAX_AGE).contains(age))
                .ok_or_else(|| invalid(FormField::Age))?,
            duration: duration
                .parse::<i32>()
                .ok()
                .filter(|duration| *duration >= 1)
                .ok_or_else(|| invalid(FormField::Duration))?,
            duration_unit: duration_unit
                .parse()
                .map_err(|_| invalid(FormField::DurationUnit))?,
        })
    }
}
