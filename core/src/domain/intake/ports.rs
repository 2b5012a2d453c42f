use std::future::Future;

use thiserror::Error;

use crate::domain::symptom_analysis::entities::{AnalysisResult, SymptomRequest};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The relay call did not complete.
    #[error("relay request failed: {0}")]
    Transport(String),

    /// The relay answered with an `{ "error": ... }` body.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("relay returned an unreadable response: {0}")]
    InvalidResponse(String),
}

/// Client for the analysis relay endpoint
#[cfg_attr(test, mockall::automock)]
pub trait RelayClient: Send + Sync {
    fn analyze(
        &self,
        request: SymptomRequest,
    ) -> impl Future<Output = Result<AnalysisResult, RelayError>> + Send;
}
