use super::{VisionClient, VisionRequest};
use crate::{Error, Result, config::ModelConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageUrl,
    },
};
use async_trait::async_trait;
use tracing::debug;

/// Any OpenAI-compatible chat completions endpoint that accepts image parts.
pub struct OpenAiVisionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiVisionClient {
    pub fn new(config: &ModelConfig, api_key: String) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.trim_end_matches('/'));
        }

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        }
    }

    fn build_message(request: &VisionRequest) -> Result<ChatCompletionRequestMessage> {
        let parts = vec![
            ChatCompletionRequestUserMessageContentPart::Text(
                ChatCompletionRequestMessageContentPartText {
                    text: request.prompt.clone(),
                },
            ),
            ChatCompletionRequestUserMessageContentPart::ImageUrl(
                ChatCompletionRequestMessageContentPartImage {
                    image_url: ImageUrl {
                        url: request.image.to_data_url(),
                        detail: None,
                    },
                },
            ),
        ];

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(parts))
            .build()
            .map_err(|e| Error::model(format!("Failed to build user message: {}", e)))?;

        Ok(message.into())
    }
}

#[async_trait]
impl VisionClient for OpenAiVisionClient {
    async fn describe(&self, request: VisionRequest) -> Result<String> {
        debug!(
            model = %self.model,
            image_size = request.image.bytes.len(),
            mime_type = %request.image.mime_type,
            "Creating chat completion with image"
        );

        let openai_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![Self::build_message(&request)?])
            .build()
            .map_err(|e| Error::model(format!("Failed to build request: {}", e)))?;

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(|e| Error::model(e.to_string()))?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::decode("Chat completion returned no content"));
        }

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
