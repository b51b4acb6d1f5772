use crate::{Error, Result, config::FetchConfig, error::error_chain};
use axum::body::Bytes;
use reqwest::{Client, header::CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

/// Raw image payload as served by the remote host.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Bytes,
    /// Upstream `Content-Type`, informational only.
    pub content_type: Option<String>,
}

/// Downloads images over HTTP with a single shared client.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GETs `url` and returns its body. Every failure, including an empty or
    /// malformed URL and any non-2xx status, is an [`Error::Fetch`].
    pub async fn fetch(&self, url: &str) -> Result<FetchedImage> {
        debug!(url = %url, "Fetching image");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| Error::fetch(error_chain(&e)))?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::fetch(error_chain(&e)))?;

        debug!(
            url = %url,
            size = bytes.len(),
            content_type = content_type.as_deref().unwrap_or("unknown"),
            "Fetched image"
        );

        Ok(FetchedImage {
            bytes,
            content_type,
        })
    }
}
