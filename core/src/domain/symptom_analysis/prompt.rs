use crate::domain::symptom_analysis::entities::SymptomRequest;

pub const MEDICAL_SYSTEM_PROMPT: &str = "You are a medical information assistant grounded in clinical guidelines (CDC, WHO, Mayo Clinic) and evidence-based medicine.

For every set of patient-reported symptoms you provide:
1. A severity assessment (mild, moderate, severe)
2. Whether the patient should consult a doctor
3. Preventive measures tailored to the symptoms
4. Healthy habits specific to the condition

SEVERITY CLASSIFICATION:
- MILD: common, self-limiting conditions that resolve with home care (common cold, minor headache, mild muscle strain)
- MODERATE: conditions that need monitoring and possibly a consultation (persistent symptoms, moderate pain, symptoms affecting daily activities)
- SEVERE: urgent conditions that need immediate attention (chest pain, difficulty breathing, severe abdominal pain, high fever with confusion, stroke symptoms)

REQUIREMENTS:
- Consider the symptom category, description, patient age and duration
- Give condition-specific recommendations, not generic advice
- Flag emergency symptoms that require immediate care

Always respond in the exact JSON format requested.";

const RESPONSE_FORMAT: &str = r#"{
  "severity": "mild" | "moderate" | "severe",
  "shouldConsultDoctor": boolean,
  "isEmergency": boolean,
  "confidenceScore": number (0-100),
  "possibleConditions": ["condition1", "condition2"],
  "preventiveMeasures": [
    "Specific measure 1 tailored to symptoms",
    "Specific measure 2 tailored to symptoms",
    "Specific measure 3 tailored to symptoms",
    "Specific measure 4 tailored to symptoms"
  ],
  "healthyHabits": [
    "Specific habit 1 for this condition",
    "Specific habit 2 for this condition",
    "Specific habit 3 for this condition",
    "Specific habit 4 for this condition"
  ],
  "warningSignsToWatch": ["sign1", "sign2"],
  "reasoning": "Brief explanation of the assessment"
}"#;

/// Builds the user message embedding all five request fields.
pub fn build_user_prompt(request: &SymptomRequest) -> String {
    format!(
        "Analyze the following patient symptoms and provide a detailed health assessment:

PATIENT INFORMATION:
- Age: {age} years old
- Symptom Category: {category}
- Symptom Duration: {duration} {unit}
- Symptom Description: {description}

Based on established medical knowledge and clinical guidelines, analyze these symptoms and respond with a JSON object in this exact format:
{format}

Ensure preventive measures and healthy habits are SPECIFIC to the reported symptoms and category, not generic health advice.",
        age = request.age,
        category = request.category,
        duration = request.duration,
        unit = request.duration_unit,
        description = request.description,
        format = RESPONSE_FORMAT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symptom_analysis::entities::{DurationUnit, SymptomCategory};

    #[test]
    fn test_user_prompt_embeds_every_field() {
        let prompt = build_user_prompt(&SymptomRequest {
            category: SymptomCategory::Neurological,
            description: "throbbing headache behind the eyes".to_string(),
            age: 29,
            duration: 6,
            duration_unit: DurationUnit::Hours,
        });

        assert!(prompt.contains("- Age: 29 years old"));
        assert!(prompt.contains("- Symptom Category: neurological"));
        assert!(prompt.contains("- Symptom Duration: 6 hours"));
        assert!(prompt.contains("- Symptom Description: throbbing headache behind the eyes"));
        assert!(prompt.contains("\"shouldConsultDoctor\": boolean"));
    }
}
