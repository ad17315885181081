
use crate::config::OllamaConfig;
use crate::{Error, Result};
use super::{EmbeddingProvider, ModelMetadata};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct EmbeddingsRequest {
    model: String,
    prompt: String,
    options: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    embedding: Vec<f32>,
}

pub struct OllamaEmbedding {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaEmbedding {
    pub fn new(config: OllamaConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Generation options sent with every request. Named options first,
    /// then `additional_options`, which wins on key collision.
    fn request_options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        options.insert("temperature".to_string(), json!(self.config.temperature));
        options.insert("num_ctx".to_string(), json!(self.config.context_window));
        options.insert("top_p".to_string(), json!(self.config.top_p));

        for (key, value) in &self.config.additional_options {
            options.insert(key.clone(), value.clone());
        }

        options
    }

    async fn fetch_embedding(&self, prompt: &str) -> Result<Vec<f32>> {
        let request = EmbeddingsRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            options: self.request_options(),
        };

        let url = format!("{}/api/embeddings", self.config.base_url);

        tracing::debug!(
            "Sending embedding request to {} for {} chars",
            url,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(self.config.request_timeout_ms)
                } else {
                    Error::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Ollama API error ({status}): {body}");
            return Err(Error::Api { status, body });
        }

        let decoded: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(format!("Ollama JSON parse error: {e}")))?;

        tracing::debug!(
            "Received embedding with {} dimensions",
            decoded.embedding.len()
        );

        Ok(decoded.embedding)
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbedding {
    async fn embed_text(&self, text: &str) -> Result<Vec<f32>> {
        self.fetch_embedding(text).await
    }

    async fn embed_query(&self, query: &str) -> Result<Vec<f32>> {
        self.fetch_embedding(query).await
    }

    fn metadata(&self) -> ModelMetadata {
        ModelMetadata {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: None,
            context_window: self.config.context_window,
            tokenizer: None,
        }
    }

    fn provider_name(&self) -> &str {
        "Ollama"
    }
}
