mod gemini;
mod openai;
mod types;

pub use gemini::GeminiClient;
pub use openai::OpenAiVisionClient;
pub use types::*;

use crate::{
    Result,
    config::{ModelConfig, ModelProvider},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// A multimodal model that turns a prompt plus one image into text.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn describe(&self, request: VisionRequest) -> Result<String>;

    fn model(&self) -> &str;
}

/// Builds the backend selected by `config.provider`.
pub fn create_client(config: &ModelConfig, api_key: String) -> Result<Arc<dyn VisionClient>> {
    info!(
        "Creating {} vision client for model {}",
        config.provider, config.model
    );

    let client: Arc<dyn VisionClient> = match config.provider {
        ModelProvider::Gemini => Arc::new(GeminiClient::new(config, api_key)?),
        ModelProvider::OpenAi => Arc::new(OpenAiVisionClient::new(config, api_key)),
    };
    Ok(client)
}
