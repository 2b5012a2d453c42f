use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    intake::{
        form::{SymptomForm, ValidationNotice},
        ports::{RelayClient, RelayError},
        presentation::ResultView,
    },
    symptom_analysis::entities::{AnalysisResult, SymptomRequest},
};

pub const GENERIC_FAILURE_NOTICE: &str = "Failed to analyze symptoms. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationNotice),

    #[error("an analysis is already in progress")]
    SubmissionInFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeState {
    Idle,
    Loading,
    Completed {
        result: AnalysisResult,
        view: ResultView,
        notice: String,
    },
    Failed {
        notice: String,
    },
}

/// Ticket handed out by [`IntakeController::begin`]; its outcome is only
/// applied while `generation` is still current.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub generation: u64,
    pub request: SymptomRequest,
}

/// Per-session submission state. At most one analysis is in flight.
#[derive(Debug)]
pub struct IntakeController {
    state: IntakeState,
    generation: u64,
}

impl Default for IntakeController {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeController {
    pub fn new() -> Self {
        Self {
            state: IntakeState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    pub fn submit_enabled(&self) -> bool {
        !matches!(self.state, IntakeState::Loading)
    }

    pub fn result_view(&self) -> Option<&ResultView> {
        match &self.state {
            IntakeState::Completed { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn begin(&mut self, form: &SymptomForm) -> Result<PendingSubmission, IntakeError> {
        if !self.submit_enabled() {
            return Err(IntakeError::SubmissionInFlight);
        }

        let request = form.validate()?;

        self.generation += 1;
        self.state = IntakeState::Loading;

        Ok(PendingSubmission {
            generation: self.generation,
            request,
        })
    }

    /// Applies a relay outcome. Returns `false` when the submission was
    /// superseded and the outcome was dropped.
    pub fn finish(
        &mut self,
        generation: u64,
        outcome: Result<AnalysisResult, RelayError>,
    ) -> bool {
        if generation != self.generation || self.state != IntakeState::Loading {
            debug!(generation, current = self.generation, "Discarding stale analysis outcome");
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                let notice = match result.confidence_score {
                    Some(score) => format!("Analysis complete with {score}% confidence"),
                    None => "Analysis complete".to_string(),
                };
                IntakeState::Completed {
                    view: ResultView::from(&result),
                    result,
                    notice,
                }
            }
            Err(RelayError::Rejected { status, message }) => {
                warn!(status, %message, "Relay rejected the analysis");
                IntakeState::Failed { notice: message }
            }
            Err(error) => {
                warn!(%error, "Analysis request failed");
                IntakeState::Failed {
                    notice: GENERIC_FAILURE_NOTICE.to_string(),
                }
            }
        };

        true
    }

    /// The view went away; whatever is still in flight is dropped.
    pub fn navigate_away(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = IntakeState::Idle;
    }

    /// Validates, calls the relay once and applies the outcome. No retry.
    pub async fn submit<R: RelayClient>(
        &mut self,
        relay: &R,
        form: &SymptomForm,
    ) -> Result<&IntakeState, IntakeError> {
        let pending = self.begin(form)?;
        let outcome = relay.analyze(pending.request).await;
        self.finish(pending.generation, outcome);

        Ok(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::domain::symptom_analysis::entities::Severity;

    struct StubRelay {
        reply: Result<AnalysisResult, RelayError>,
        calls: Arc<AtomicUsize>,
    }

    impl RelayClient for StubRelay {
        async fn analyze(&self, _: SymptomRequest) -> Result<AnalysisResult, RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn relay(reply: Result<AnalysisResult, RelayError>) -> StubRelay {
        StubRelay {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn form() -> SymptomForm {
        SymptomForm {
            category: "respiratory".to_string(),
            description: "dry cough that keeps me up at night".to_string(),
            age: "29".to_string(),
            duration: "4".to_string(),
            ..SymptomForm::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_relay() {
        let relay = relay(Ok(AnalysisResult::fallback()));
        let mut controller = IntakeController::new();

        let short = SymptomForm {
            description: "cough".to_string(),
            ..form()
        };
        let outcome = controller.submit(&relay, &short).await;

        assert_eq!(
            outcome,
            Err(IntakeError::Validation(ValidationNotice::DescriptionTooShort))
        );
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.state(), &IntakeState::Idle);
    }

    #[tokio::test]
    async fn test_success_notice_mentions_confidence() {
        let relay = relay(Ok(AnalysisResult::fallback()));
        let mut controller = IntakeController::new();

        let state = controller.submit(&relay, &form()).await.unwrap();
        match state {
            IntakeState::Completed { notice, result, .. } => {
                assert_eq!(notice, "Analysis complete with 70% confidence");
                assert_eq!(result.severity, Severity::Moderate);
            }
            other => panic!("unexpected state {other:?}"),
        }
        assert!(controller.result_view().is_some());
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_success_without_confidence() {
        let result = AnalysisResult {
            confidence_score: None,
            ..AnalysisResult::fallback()
        };
        let mut controller = IntakeController::new();

        controller.submit(&relay(Ok(result)), &form()).await.unwrap();
        assert!(matches!(
            controller.state(),
            IntakeState::Completed { notice, .. } if notice == "Analysis complete"
        ));
    }

    #[tokio::test]
    async fn test_failure_notices() {
        let rejected = relay(Err(RelayError::Rejected {
            status: 429,
            message: "Rate limit exceeded. Please try again in a moment.".to_string(),
        }));
        let mut controller = IntakeController::new();
        controller.submit(&rejected, &form()).await.unwrap();
        assert_eq!(
            controller.state(),
            &IntakeState::Failed {
                notice: "Rate limit exceeded. Please try again in a moment.".to_string()
            }
        );

        let offline = relay(Err(RelayError::Transport("connection refused".to_string())));
        controller.submit(&offline, &form()).await.unwrap();
        assert_eq!(
            controller.state(),
            &IntakeState::Failed {
                notice: GENERIC_FAILURE_NOTICE.to_string()
            }
        );
    }

    #[test]
    fn test_second_begin_while_loading_is_refused() {
        let mut controller = IntakeController::new();
        controller.begin(&form()).unwrap();

        assert!(!controller.submit_enabled());
        assert_eq!(controller.begin(&form()), Err(IntakeError::SubmissionInFlight));
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut controller = IntakeController::new();
        let first = controller.begin(&form()).unwrap();
        assert!(controller.finish(first.generation, Ok(AnalysisResult::fallback())));

        controller.begin(&form()).unwrap();
        assert_eq!(controller.state(), &IntakeState::Loading);
        assert!(controller.result_view().is_none());
    }

    #[test]
    fn test_outcome_after_navigate_away_is_discarded() {
        let mut controller = IntakeController::new();
        let pending = controller.begin(&form()).unwrap();

        controller.navigate_away();
        assert!(!controller.finish(pending.generation, Ok(AnalysisResult::fallback())));
        assert_eq!(controller.state(), &IntakeState::Idle);

        let next = controller.begin(&form()).unwrap();
        assert!(!controller.finish(pending.generation, Ok(AnalysisResult::fallback())));
        assert!(controller.finish(next.generation, Ok(AnalysisResult::fallback())));
    }
}
