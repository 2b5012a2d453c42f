use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_LLM_BASE_URL: &str = "https://ai.gateway.lovable.dev/v1";
pub const DEFAULT_LLM_MODEL: &str = "google/gemini-2.5-flash";
pub const DEFAULT_LLM_TEMPERATURE: f32 = 0.3;

#[derive(Clone, Debug)]
pub struct CarePulseConfig {
    pub llm: LLMConfig,
    pub seed_sample_data: bool,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` keeps the server bootable; every analysis then fails with a configuration error.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_string(),
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            temperature: DEFAULT_LLM_TEMPERATURE,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
