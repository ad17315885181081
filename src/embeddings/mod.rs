
pub mod ollama;

use crate::Result;
use async_trait::async_trait;
use serde::Serialize;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a piece of document text
    async fn embed_text(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed a search query. Providers may treat queries differently
    /// from document text; Ollama does not.
    async fn embed_query(&self, query: &str) -> Result<Vec<f32>>;

    fn metadata(&self) -> ModelMetadata;

    fn provider_name(&self) -> &str;
}

/// Read-only snapshot of the generation settings a provider runs with
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: Option<u32>,
    pub context_window: u32,
    pub tokenizer: Option<String>,
}

pub use ollama::OllamaEmbedding;
