//! Application configuration and constants.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use color_eyre::{Result, eyre::eyre};

/// Fixed base URL of the completion service (OpenAI-compatible Groq endpoint).
pub const API_BASE: &str = "https://api.groq.com/openai/v1";

/// Model identifier sent with every completion request.
pub const MODEL_NAME: &str = "llama3-8b-8192";

/// Default path of the vocabulary dataset (category,name CSV).
pub const DEFAULT_DATASET_PATH: &str = "pizza_dataset.csv";

/// Process-wide configuration, captured once at startup and passed to every
/// component that issues remote calls.
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential for the completion service.
    pub api_key: String,
    /// Base URL of the completion service.
    pub api_base: String,
    /// Model name.
    pub model: String,
    /// Completion token cap per request.
    pub max_tokens: u32,
    /// Path of the vocabulary CSV.
    pub dataset_path: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `GROQ_API_KEY` is the one required variable; everything else is a
    /// fixed constant (`PIZZA_DATASET` may override the dataset path).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| eyre!("GROQ_API_KEY is not set (required API credential)"))?;
        let dataset_path =
            std::env::var("PIZZA_DATASET").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());

        Ok(Self {
            api_key,
            api_base: API_BASE.to_string(),
            model: MODEL_NAME.to_string(),
            max_tokens: 1024,
            dataset_path,
        })
    }

    /// Build the completion client from this configuration.
    pub fn client(&self) -> Client<OpenAIConfig> {
        let api_config = OpenAIConfig::new()
            .with_api_key(self.api_key.clone())
            .with_api_base(self.api_base.clone());
        Client::with_config(api_config)
    }
}
