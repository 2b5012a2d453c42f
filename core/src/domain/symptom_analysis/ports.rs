use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom_analysis::entities::{AnalysisResult, SymptomRequest},
};

/// Chat-completion provider.
///
/// Returns the text of the first choice. A successful call with no choice or
/// no content yields an empty string.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_chat(
        &self,
        system_prompt: String,
        user_prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the symptom analysis relay
#[cfg_attr(test, mockall::automock)]
pub trait SymptomAnalysisService: Send + Sync {
    fn analyze_symptoms(
        &self,
        input: SymptomRequest,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
