use std::fmt;

use crate::domain::symptom_analysis::entities::{AnalysisResult, Severity};

pub const DISCLAIMER: &str = "This AI symptom checker provides general health information only. It is not a substitute for professional medical advice, diagnosis, or treatment.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBadge {
    pub label: &'static str,
    pub class_name: &'static str,
}

impl From<Severity> for SeverityBadge {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Mild => SeverityBadge {
                label: "Mild",
                class_name: "severity-mild",
            },
            Severity::Moderate => SeverityBadge {
                label: "Moderate",
                class_name: "severity-moderate",
            },
            Severity::Severe => SeverityBadge {
                label: "Severe",
                class_name: "severity-severe",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultAdvice {
    Recommended,
    NotUrgent,
}

impl ConsultAdvice {
    pub fn label(&self) -> &'static str {
        match self {
            ConsultAdvice::Recommended => "Recommended",
            ConsultAdvice::NotUrgent => "Not Urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyBanner {
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

impl Default for EmergencyBanner {
    fn default() -> Self {
        Self {
            title: "Emergency Alert",
            message: "Based on your symptoms, we recommend seeking immediate medical attention. Please contact emergency services or visit the nearest emergency room.",
            action: "View Emergency Contacts",
        }
    }
}

/// The standard result panel, present for every result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub badge: SeverityBadge,
    pub consult: ConsultAdvice,
    pub confidence_label: Option<String>,
    pub assessment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Shown above the panel, never instead of it.
    pub emergency_banner: Option<EmergencyBanner>,
    pub panel: ResultPanel,
    pub possible_conditions: Option<Vec<String>>,
    pub warning_signs: Option<Vec<String>>,
    /// Numbered from 1.
    pub preventive_measures: Vec<(usize, String)>,
    pub healthy_habits: Vec<String>,
}

fn non_empty(list: &Option<Vec<String>>) -> Option<Vec<String>> {
    list.as_ref().filter(|items| !items.is_empty()).cloned()
}

impl From<&AnalysisResult> for ResultView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            emergency_banner: result.is_emergency.then(EmergencyBanner::default),
            panel: ResultPanel {
                badge: result.severity.into(),
                consult: if result.should_consult_doctor {
                    ConsultAdvice::Recommended
                } else {
                    ConsultAdvice::NotUrgent
                },
                confidence_label: result
                    .confidence_score
                    .map(|score| format!("{score}% Confidence")),
                assessment: result.reasoning.clone(),
            },
            possible_conditions: non_empty(&result.possible_conditions),
            warning_signs: non_empty(&result.warning_signs_to_watch),
            preventive_measures: result
                .preventive_measures
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, measure)| (index + 1, measure))
                .collect(),
            healthy_habits: result.healthy_habits.clone(),
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(banner) = &self.emergency_banner {
            writeln!(f, "!! {}", banner.title)?;
            writeln!(f, "   {}", banner.message)?;
            writeln!(f, "   [{}]", banner.action)?;
            writeln!(f)?;
        }

        match &self.panel.confidence_label {
            Some(confidence) => writeln!(f, "AI Analysis Result ({confidence})")?,
            None => writeln!(f, "AI Analysis Result")?,
        }
        writeln!(f, "Condition Stage: {}", self.panel.badge.label)?;
        writeln!(f, "Consult a Doctor? {}", self.panel.consult.label())?;
        if let Some(assessment) = &self.panel.assessment {
            writeln!(f, "Assessment: {assessment}")?;
        }

        for (title, items) in [
            ("Possible Conditions", &self.possible_conditions),
            ("Warning Signs to Watch", &self.warning_signs),
        ] {
            if let Some(items) = items {
                writeln!(f, "\n{title}:")?;
                for item in items {
                    writeln!(f, "  - {item}")?;
                }
            }
        }

        writeln!(f, "\nPreventive Measures:")?;
        for (position, measure) in &self.preventive_measures {
            writeln!(f, "  {position}. {measure}")?;
        }

        writeln!(f, "\nHealthy Habits:")?;
        for habit in &self.healthy_habits {
            writeln!(f, "  - {habit}")?;
        }

        write!(f, "\nDisclaimer: {DISCLAIMER}")
    }
}
