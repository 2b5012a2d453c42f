//! Pulls the analysis object out of free-form completion text.
//!
//! Models wrap their JSON in prose or markdown fences often enough that the
//! completion cannot be parsed as-is. Extraction scans for top-level
//! brace-delimited spans (braces inside JSON strings do not count) and parses
//! only the first one. If that span is not a usable analysis the completion
//! falls back, even when a later span would have been.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::domain::symptom_analysis::entities::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no JSON object found in completion")]
    NoObject,

    #[error("unbalanced JSON object starting at byte {0}")]
    Unbalanced(usize),

    #[error("invalid JSON object: {0}")]
    InvalidJson(String),

    #[error("JSON object does not match the analysis shape: {0}")]
    Shape(String),
}

/// Byte range `start..end` of the balanced object opening at `start`.
///
/// `start` must point at a `{`.
fn balanced_span(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Byte range of the first top-level balanced `{...}` span.
pub fn first_object_span(text: &str) -> Result<(usize, usize), ExtractionError> {
    let start = text.find('{').ok_or(ExtractionError::NoObject)?;
    let end = balanced_span(text, start).ok_or(ExtractionError::Unbalanced(start))?;

    Ok((start, end))
}

/// Parses the first top-level span. Later spans are never consulted.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractionError> {
    let (start, end) = first_object_span(text)?;

    match serde_json::from_str::<Value>(&text[start..end]) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(ExtractionError::InvalidJson("not an object".to_string())),
        Err(e) => Err(ExtractionError::InvalidJson(e.to_string())),
    }
}

/// Extracts the object and checks it against the `AnalysisResult` shape.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, ExtractionError> {
    let object = extract_json_object(text)?;

    serde_json::from_value(Value::Object(object)).map_err(|e| ExtractionError::Shape(e.to_string()))
}

/// Parsed analysis, or the fixed fallback when the completion is unusable.
pub fn analysis_or_fallback(text: &str) -> AnalysisResult {
    match parse_analysis(text) {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Failed to parse completion, using fallback analysis");
            AnalysisResult::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symptom_analysis::entities::Severity;

    const ANALYSIS: &str = r#"{
  "severity": "mild",
  "shouldConsultDoctor": false,
  "isEmergency": false,
  "confidenceScore": 82,
  "possibleConditions": ["Common cold"],
  "preventiveMeasures": ["Rest", "Fluids", "Saline rinse", "Humidifier"],
  "healthyHabits": ["Sleep", "Hand washing", "Balanced diet", "Light walks"],
  "warningSignsToWatch": ["Fever above 39C"],
  "reasoning": "Symptoms match a {viral} upper respiratory infection."
}"#;

    #[test]
    fn test_bare_object_is_returned() {
        let result = parse_analysis(ANALYSIS).unwrap();
        assert_eq!(result.severity, Severity::Mild);
        assert_eq!(result.confidence_score, Some(82));
        assert_eq!(
            result.reasoning.as_deref(),
            Some("Symptoms match a {viral} upper respiratory infection.")
        );
    }

    #[test]
    fn test_object_inside_prose_and_fence() {
        let wrapped = format!(
            "Here is the assessment you asked for:\n```json\n{ANALYSIS}\n```\nStay safe!"
        );
        assert_eq!(parse_analysis(&wrapped), parse_analysis(ANALYSIS));
    }

    #[test]
    fn test_braces_inside_strings_do_not_end_the_span() {
        let text = r#"prefix {"a": "}", "b": {"c": "\"{"}} suffix"#;
        let object = extract_json_object(text).unwrap();
        assert_eq!(object["a"], "}");
        assert_eq!(object["b"]["c"], "\"{");
    }

    #[test]
    fn test_only_the_first_span_is_parsed() {
        let text = r#"then {"first": 1} and {"second": 2}"#;
        let object = extract_json_object(text).unwrap();
        assert_eq!(object.get("first"), Some(&Value::from(1)));
        assert!(object.get("second").is_none());

        assert!(matches!(
            extract_json_object(r#"use {placeholders} then {"first": 1}"#),
            Err(ExtractionError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_later_valid_analysis_does_not_rescue_first_span() {
        let template = format!("Template {{severity}} follows: {ANALYSIS}");
        assert_eq!(analysis_or_fallback(&template), AnalysisResult::fallback());

        let echo = format!(r#"Input echo: {{"age": 42}} Result: {ANALYSIS}"#);
        assert_eq!(analysis_or_fallback(&echo), AnalysisResult::fallback());
    }

    #[test]
    fn test_no_object() {
        assert_eq!(
            extract_json_object("I cannot help with that."),
            Err(ExtractionError::NoObject)
        );
    }

    #[test]
    fn test_unbalanced_object() {
        assert_eq!(
            extract_json_object(r#"result: {"severity": "mild""#),
            Err(ExtractionError::Unbalanced(8))
        );
    }

    #[test]
    fn test_invalid_json_span() {
        assert!(matches!(
            extract_json_object("{severity: mild}"),
            Err(ExtractionError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(matches!(
            parse_analysis(r#"{"severity": "catastrophic"}"#),
            Err(ExtractionError::Shape(_))
        ));
    }

    #[test]
    fn test_fallback_on_unusable_text() {
        assert_eq!(analysis_or_fallback(""), AnalysisResult::fallback());
        assert_eq!(
            analysis_or_fallback("```json\n{oops}\n```"),
            AnalysisResult::fallback()
        );
        assert_ne!(analysis_or_fallback(ANALYSIS), AnalysisResult::fallback());
    }
}
