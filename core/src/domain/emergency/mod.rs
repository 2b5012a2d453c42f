use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmergencyContact {
    pub name: String,
    pub number: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmergencyGuide {
    /// Number to dial first.
    pub primary_number: String,
    pub contacts: Vec<EmergencyContact>,
    /// Symptoms that warrant immediate medical help.
    pub warning_symptoms: Vec<String>,
}

const CONTACTS: [(&str, &str, &str); 3] = [
    (
        "Emergency Services",
        "911",
        "For immediate life-threatening emergencies",
    ),
    ("Poison Control", "1-800-222-1222", "For poisoning emergencies"),
    ("Mental Health Crisis", "988", "Suicide & Crisis Lifeline"),
];

const WARNING_SYMPTOMS: [&str; 8] = [
    "Chest pain or pressure",
    "Sudden severe headache",
    "Difficulty breathing",
    "Signs of stroke (face drooping, arm weakness, speech difficulty)",
    "Sudden numbness or weakness",
    "Severe allergic reactions",
    "Uncontrolled bleeding",
    "Loss of consciousness",
];

pub fn emergency_guide() -> EmergencyGuide {
    EmergencyGuide {
        primary_number: CONTACTS[0].1.to_string(),
        contacts: CONTACTS
            .iter()
            .map(|(name, number, description)| EmergencyContact {
                name: name.to_string(),
                number: number.to_string(),
                description: description.to_string(),
            })
            .collect(),
        warning_symptoms: WARNING_SYMPTOMS.iter().map(|s| s.to_string()).collect(),
    }
}
