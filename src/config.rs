use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Model to embed with, e.g. "nomic-embed-text". Required.
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Token span the model considers per request, sent as `num_ctx`
    #[serde(default = "default_context_window")]
    pub context_window: u32,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Extra generation options merged into the request payload.
    /// Entries win over `temperature`, `num_ctx` and `top_p` on key collision.
    #[serde(default)]
    pub additional_options: Map<String, Value>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    0.9
}

fn default_context_window() -> u32 {
    4096
}

fn default_request_timeout_ms() -> u64 {
    60_000
}

impl OllamaConfig {
    /// Configuration for `model` with documented defaults for everything else
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            context_window: default_context_window(),
            request_timeout_ms: default_request_timeout_ms(),
            additional_options: Map::new(),
        }
    }

    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let model = std::env::var("OLLAMA_MODEL")
            .map_err(|_| Error::Config("Missing OLLAMA_MODEL".to_string()))?;

        let mut config = Self::new(model);

        if let Ok(base_url) = std::env::var("OLLAMA_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(temperature) = std::env::var("OLLAMA_TEMPERATURE") {
            config.temperature = temperature.parse().map_err(|_| {
                Error::Config(format!("Invalid OLLAMA_TEMPERATURE: {temperature}"))
            })?;
        }

        if let Ok(top_p) = std::env::var("OLLAMA_TOP_P") {
            config.top_p = top_p
                .parse()
                .map_err(|_| Error::Config(format!("Invalid OLLAMA_TOP_P: {top_p}")))?;
        }

        if let Ok(context_window) = std::env::var("OLLAMA_CONTEXT_WINDOW") {
            config.context_window = context_window.parse().map_err(|_| {
                Error::Config(format!("Invalid OLLAMA_CONTEXT_WINDOW: {context_window}"))
            })?;
        }

        if let Ok(timeout) = std::env::var("OLLAMA_REQUEST_TIMEOUT_MS") {
            config.request_timeout_ms = timeout.parse().map_err(|_| {
                Error::Config(format!("Invalid OLLAMA_REQUEST_TIMEOUT_MS: {timeout}"))
            })?;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Config("Model name must not be empty".to_string()));
        }
        Ok(())
    }
}
