use async_trait::async_trait;
use image_describer::{
    Error, Result,
    vision::{VisionClient, VisionRequest},
};
use std::sync::{Arc, Mutex};

/// What the mock model does when asked for a description.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Describe(String),
    ModelError(String),
    DecodeError(String),
}

/// Mock vision client for testing
#[derive(Debug)]
pub struct MockVisionClient {
    pub behavior: MockBehavior,
    pub requests: Arc<Mutex<Vec<VisionRequest>>>,
}

impl MockVisionClient {
    pub fn new() -> Self {
        Self::with_description("This image has a mock description.")
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Describe(description.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.behavior = MockBehavior::ModelError(error.into());
        self
    }

    pub fn with_decode_error(mut self, error: impl Into<String>) -> Self {
        self.behavior = MockBehavior::DecodeError(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<VisionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VisionClient for MockVisionClient {
    async fn describe(&self, request: VisionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        match &self.behavior {
            MockBehavior::Describe(text) => Ok(text.clone()),
            MockBehavior::ModelError(error) => Err(Error::model(error.clone())),
            MockBehavior::DecodeError(error) => Err(Error::decode(error.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock-vision"
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new()
    }
}
