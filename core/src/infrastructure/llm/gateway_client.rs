use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    symptom_analysis::ports::LLMClient,
};

/// Client for an OpenAI-compatible chat completion gateway.
#[derive(Debug, Clone)]
pub struct GatewayLLMClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    temperature: f32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Maps a non-success gateway status onto the error the relay reports.
pub fn classify_status(status: StatusCode, body: &str) -> CoreError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => CoreError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => CoreError::QuotaExhausted,
        _ => CoreError::ExternalServiceError(format!("LLM API returned error: {status} - {body}")),
    }
}

impl GatewayLLMClient {
    pub fn new(config: &LLMConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &LLMConfig, client: Client) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            temperature: config.temperature,
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LLMClient for GatewayLLMClient {
    async fn generate_chat(
        &self,
        system_prompt: String,
        user_prompt: String,
    ) -> Result<String, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            error!("LLM API key is not configured");
            CoreError::ConfigurationError("LLM API key is not configured".to_string())
        })?;

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("LLM gateway request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("LLM gateway error: {} - {}", status, error_text);
            return Err(classify_status(status, &error_text));
        }

        let completion: ChatResponse = response.json().await.map_err(|e| {
            error!("Failed to parse LLM gateway response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        // An empty completion is handed on as-is; the caller substitutes the fallback.
        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default())
    }
}
