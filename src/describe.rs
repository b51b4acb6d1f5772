use crate::{
    Result,
    config::ModelConfig,
    fetch::ImageFetcher,
    vision::{ImageData, VisionClient, VisionRequest},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Fetches an image and asks the vision model to describe it.
pub struct Describer {
    fetcher: ImageFetcher,
    client: Arc<dyn VisionClient>,
    prompt: String,
    mime_type: String,
}

impl Describer {
    pub fn new(
        fetcher: ImageFetcher,
        client: Arc<dyn VisionClient>,
        prompt: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            client,
            prompt: prompt.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn from_config(
        fetcher: ImageFetcher,
        client: Arc<dyn VisionClient>,
        config: &ModelConfig,
    ) -> Self {
        Self::new(fetcher, client, &config.prompt, &config.mime_type)
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Errors keep their variant: [`crate::Error::Fetch`] from the download,
    /// anything else from the model call.
    pub async fn describe(&self, url: &str) -> Result<String> {
        let image = self.fetcher.fetch(url).await?;

        if let Some(content_type) = image.content_type.as_deref()
            && content_type != self.mime_type
        {
            debug!(
                "Image served as {} will be sent as {}",
                content_type, self.mime_type
            );
        }

        let request = VisionRequest {
            prompt: self.prompt.clone(),
            image: ImageData::new(image.bytes, self.mime_type.clone()),
        };

        let description = self.client.describe(request).await?;

        info!(
            model = %self.client.model(),
            length = description.len(),
            "Generated image description"
        );

        Ok(description)
    }
}
