use serde::{Deserialize, Serialize};

pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred processing the image.";

#[derive(Debug, Default)]
pub struct DescribeParams {
    pub url: Option<String>,
}

impl DescribeParams {
    /// Takes the first `url` pair of the raw query string. A query that cannot
    /// be decoded yields no URL so the request still reaches the fetch stage.
    pub fn from_query(query: Option<&str>) -> Self {
        let Some(query) = query else {
            return Self::default();
        };

        let url = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
            .ok()
            .and_then(|pairs| {
                pairs
                    .into_iter()
                    .find(|(key, _)| key == "url")
                    .map(|(_, value)| value)
            });

        Self { url }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DescribeResponse {
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
