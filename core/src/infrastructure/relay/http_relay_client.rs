use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::{
    intake::ports::{RelayClient, RelayError},
    symptom_analysis::entities::{AnalysisResult, SymptomRequest},
};

/// Calls the analysis relay over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelayClient {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpRelayClient {
    /// `endpoint` is the full URL of the analyze-symptoms route.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

impl RelayClient for HttpRelayClient {
    async fn analyze(&self, request: SymptomRequest) -> Result<AnalysisResult, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Relay request failed: {}", e);
                RelayError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !status.is_success() {
            debug!(%status, "Relay answered with an error");
            return match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody { error }) => Err(RelayError::Rejected {
                    status: status.as_u16(),
                    message: error,
                }),
                Err(_) => Err(RelayError::InvalidResponse(format!(
                    "unexpected status {status}"
                ))),
            };
        }

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse relay response: {}", e);
            RelayError::InvalidResponse(e.to_string())
        })
    }
}
