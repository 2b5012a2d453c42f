use carepulse_core::domain::common::{
    CarePulseConfig, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DEFAULT_LLM_TEMPERATURE, LLMConfig,
};
use clap::{ArgAction, Parser};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "carepulse-api", version, about = "CarePulse symptom analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,

    /// Seed the in-memory stores with sample appointments and reports.
    #[arg(long, env = "SEED_SAMPLE_DATA", default_value_t = true, action = ArgAction::Set)]
    pub seed_sample_data: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`. Empty by default.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "metrics", env = "METRICS_ENABLED", default_value_t = true, action = ArgAction::Set)]
    pub metrics: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "llm-api-key", env = "LLM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "llm-model", env = "LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub model: String,

    #[arg(long = "llm-base-url", env = "LLM_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub base_url: Url,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = DEFAULT_LLM_TEMPERATURE)]
    pub temperature: f32,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for CarePulseConfig {
    fn from(args: Args) -> Self {
        CarePulseConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key.filter(|key| !key.trim().is_empty()),
                model: args.llm.model,
                base_url: args.llm.base_url.as_str().trim_end_matches('/').to_string(),
                temperature: args.llm.temperature,
            },
            seed_sample_data: args.seed_sample_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["carepulse-api", "--llm-api-key", "secret"]).unwrap();
        let config = CarePulseConfig::from(args.clone());

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.llm.base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);
        assert_eq!(config.llm.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        assert!(
            Args::try_parse_from(["carepulse-api", "--llm-base-url", "gateway without scheme"])
                .is_err()
        );
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let args = Args::try_parse_from(["carepulse-api", "--llm-api-key", "  "]).unwrap();
        assert_eq!(CarePulseConfig::from(args).llm.api_key, None);
    }
}
