//! Google Gemini backend using the native `generateContent` REST API.

use super::{VisionClient, VisionRequest};
use crate::{Error, Result, config::ModelConfig, error::error_chain};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &ModelConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = if config.base_url.is_empty() {
            GEMINI_API_BASE.to_string()
        } else {
            config.base_url.trim_end_matches('/').to_string()
        };

        Ok(Self {
            client,
            base_url,
            model: config.model.clone(),
            api_key,
        })
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl VisionClient for GeminiClient {
    async fn describe(&self, request: VisionRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::Text {
                        text: request.prompt,
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: request.image.mime_type.clone(),
                            data: request.image.to_base64(),
                        },
                    },
                ],
            }],
        };

        debug!(
            model = %self.model,
            image_size = request.image.bytes.len(),
            mime_type = %request.image.mime_type,
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::model(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::model(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::decode(format!("Failed to parse Gemini response: {}", e)))?;

        api_response.into_text()
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Other(serde_json::Value),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    fn into_text(self) -> Result<String> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(Error::decode(match block_reason {
                Some(reason) => format!("Gemini blocked the prompt: {}", reason),
                None => "Gemini returned no candidates".to_string(),
            }));
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text),
                _ => None,
            })
            .collect();

        if text.trim().is_empty() {
            return Err(Error::decode(format!(
                "Gemini candidate has no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(text)
    }
}
