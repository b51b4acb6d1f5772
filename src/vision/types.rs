use axum::body::Bytes;
use base64::{Engine as _, engine::general_purpose};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub bytes: Bytes,
    pub mime_type: String,
}

#[derive(Debug, Clone)]
pub struct VisionRequest {
    pub prompt: String,
    pub image: ImageData,
}

impl ImageData {
    pub fn new(bytes: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}
