use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    General,
    Respiratory,
    Digestive,
    Cardiac,
    Mental,
    Neurological,
    Musculoskeletal,
    Dermatological,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 8] = [
        SymptomCategory::General,
        SymptomCategory::Respiratory,
        SymptomCategory::Digestive,
        SymptomCategory::Cardiac,
        SymptomCategory::Mental,
        SymptomCategory::Neurological,
        SymptomCategory::Musculoskeletal,
        SymptomCategory::Dermatological,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::General => "general",
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Digestive => "digestive",
            SymptomCategory::Cardiac => "cardiac",
            SymptomCategory::Mental => "mental",
            SymptomCategory::Neurological => "neurological",
            SymptomCategory::Musculoskeletal => "musculoskeletal",
            SymptomCategory::Dermatological => "dermatological",
        }
    }

    /// Label shown in the category picker.
    pub fn label(&self) -> &'static str {
        match self {
            SymptomCategory::General => "General (Fever, Fatigue, Pain)",
            SymptomCategory::Respiratory => "Respiratory (Cough, Breathing, Congestion)",
            SymptomCategory::Digestive => "Digestive (Stomach, Nausea, Appetite)",
            SymptomCategory::Cardiac => "Cardiac (Chest, Heart, Circulation)",
            SymptomCategory::Mental => "Mental Health (Anxiety, Depression, Stress)",
            SymptomCategory::Neurological => "Neurological (Headache, Dizziness, Memory)",
            SymptomCategory::Musculoskeletal => "Musculoskeletal (Joint, Muscle, Back)",
            SymptomCategory::Dermatological => "Dermatological (Skin, Rash, Itching)",
        }
    }
}

impl FromStr for SymptomCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymptomCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::Invalid(format!("unknown symptom category: {s}")))
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 5] = [
        DurationUnit::Hours,
        DurationUnit::Days,
        DurationUnit::Weeks,
        DurationUnit::Months,
        DurationUnit::Years,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DurationUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| CoreError::Invalid(format!("unknown duration unit: {s}")))
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "Mild", alias = "MILD")]
    Mild,
    #[serde(alias = "Moderate", alias = "MODERATE")]
    Moderate,
    #[serde(alias = "Severe", alias = "SEVERE")]
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// Structured symptom input, sent once per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SymptomRequest {
    pub category: SymptomCategory,
    pub description: String,
    #[schema(example = 34)]
    pub age: i32,
    #[schema(example = 3)]
    pub duration: i32,
    pub duration_unit: DurationUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub severity: Severity,
    pub should_consult_doctor: bool,
    pub is_emergency: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_confidence",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(minimum = 0, maximum = 100)]
    pub confidence_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_conditions: Option<Vec<String>>,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
    #[serde(default)]
    pub healthy_habits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_signs_to_watch: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl AnalysisResult {
    /// Generic advice returned whenever the completion text cannot be turned
    /// into an `AnalysisResult`.
    pub fn fallback() -> Self {
        Self {
            severity: Severity::Moderate,
            should_consult_doctor: true,
            is_emergency: false,
            confidence_score: Some(70),
            possible_conditions: Some(vec![
                "Unable to determine specific condition".to_string(),
            ]),
            preventive_measures: vec![
                "Monitor your symptoms closely and track any changes".to_string(),
                "Stay hydrated and get adequate rest".to_string(),
                "Avoid activities that worsen your symptoms".to_string(),
                "Keep a symptom diary to share with your healthcare provider".to_string(),
            ],
            healthy_habits: vec![
                "Maintain a balanced diet with plenty of fruits and vegetables".to_string(),
                "Ensure 7-8 hours of quality sleep each night".to_string(),
                "Practice stress management techniques like deep breathing".to_string(),
                "Engage in light physical activity as tolerated".to_string(),
            ],
            warning_signs_to_watch: Some(vec![
                "Worsening symptoms".to_string(),
                "New symptoms appearing".to_string(),
            ]),
            reasoning: Some(
                "Based on the provided symptoms, a medical consultation is recommended for proper evaluation."
                    .to_string(),
            ),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfidence {
    Number(f64),
    Text(String),
}

/// Models sometimes answer `85.0`, `120` or `"85%"`; keep the score an integer in 0..=100.
fn deserialize_confidence<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let score = match Option::<RawConfidence>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawConfidence::Number(score)) => score,
        Some(RawConfidence::Text(text)) => text
            .trim()
            .trim_end_matches('%')
            .trim_end()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid confidence score {text:?}")))?,
    };

    if !score.is_finite() {
        return Err(D::Error::custom("confidence score is not finite"));
    }

    Ok(Some(score.round().clamp(0.0, 100.0) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in SymptomCategory::ALL {
            assert_eq!(category.as_str().parse::<SymptomCategory>(), Ok(category));
        }
        assert!("ortho".parse::<SymptomCategory>().is_err());
    }

    #[test]
    fn test_symptom_request_uses_camel_case() {
        let request = SymptomRequest {
            category: SymptomCategory::Respiratory,
            description: "dry cough for a few days".to_string(),
            age: 42,
            duration: 3,
            duration_unit: DurationUnit::Days,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "category": "respiratory",
                "description": "dry cough for a few days",
                "age": 42,
                "duration": 3,
                "durationUnit": "days"
            })
        );
    }

    #[test]
    fn test_missing_optional_fields_deserialize_as_none() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "severity": "mild",
            "shouldConsultDoctor": false,
            "isEmergency": false,
            "preventiveMeasures": ["Rest"],
            "healthyHabits": ["Sleep"]
        }))
        .unwrap();

        assert_eq!(result.confidence_score, None);
        assert_eq!(result.possible_conditions, None);
        assert_eq!(result.warning_signs_to_watch, None);
        assert_eq!(result.reasoning, None);
    }

    #[test]
    fn test_confidence_score_is_rounded_and_clamped() {
        let parse = |score: serde_json::Value| -> Option<u8> {
            serde_json::from_value::<AnalysisResult>(json!({
                "severity": "Moderate",
                "shouldConsultDoctor": true,
                "isEmergency": false,
                "confidenceScore": score,
                "preventiveMeasures": [],
                "healthyHabits": []
            }))
            .unwrap()
            .confidence_score
        };

        assert_eq!(parse(json!(84.6)), Some(85));
        assert_eq!(parse(json!(140)), Some(100));
        assert_eq!(parse(json!(-3)), Some(0));
        assert_eq!(parse(json!(null)), None);
        assert_eq!(parse(json!("85")), Some(85));
        assert_eq!(parse(json!(" 72.4% ")), Some(72));
    }

    #[test]
    fn test_non_numeric_confidence_is_rejected() {
        let outcome = serde_json::from_value::<AnalysisResult>(json!({
            "severity": "mild",
            "shouldConsultDoctor": false,
            "isEmergency": false,
            "confidenceScore": "high",
            "preventiveMeasures": [],
            "healthyHabits": []
        }));

        assert!(outcome.is_err());
    }

    #[test]
    fn test_fallback_contents() {
        let fallback = AnalysisResult::fallback();
        assert_eq!(fallback.severity, Severity::Moderate);
        assert!(fallback.should_consult_doctor);
        assert!(!fallback.is_emergency);
        assert_eq!(fallback.confidence_score, Some(70));
        assert_eq!(fallback.preventive_measures.len(), 4);
        assert_eq!(fallback.healthy_habits.len(), 4);
        assert_eq!(
            fallback.warning_signs_to_watch.as_deref(),
            Some(&["Worsening symptoms".to_string(), "New symptoms appearing".to_string()][..])
        );
    }
}
