pub mod embeddings;

pub mod error;
pub mod config;

pub use error::{Error, Result};
pub use config::OllamaConfig;
pub use embeddings::{EmbeddingProvider, ModelMetadata, OllamaEmbedding};
