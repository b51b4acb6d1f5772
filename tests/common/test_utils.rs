use super::mocks::MockVisionClient;
use axum::Router;
use image_describer::{
    config::{Config, CorsConfig, FetchConfig, ModelConfig},
    describe::Describer,
    fetch::ImageFetcher,
    server::{self, handlers::AppState},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Smallest valid PNG: 1x1 transparent pixel.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00, 0x01, 0x00, 0x00,
    0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
    0x42, 0x60, 0x82,
];

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config
}

/// Build the production router around the given model client.
pub fn create_test_app(client: Arc<MockVisionClient>) -> Router {
    create_test_app_with_cors(client, &CorsConfig::default())
}

pub fn create_test_app_with_cors(client: Arc<MockVisionClient>, cors: &CorsConfig) -> Router {
    let config = ModelConfig::default();
    let fetcher = ImageFetcher::new(&FetchConfig::default()).unwrap();
    let describer = Describer::from_config(fetcher, client, &config);

    let app_state = AppState {
        describer: Arc::new(describer),
    };

    server::router(app_state, cors).unwrap()
}

/// Start a mock image host serving [`TINY_PNG`] at `/image.png` and a 404 at `/missing.png`.
pub async fn start_image_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(TINY_PNG),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    server
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
  cors:
    allowed_origins:
      - "https://example.com"

model:
  provider: "openai"
  base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
  model: "gemini-2.5-flash"
  api_key_env: "VISION_API_KEY"
  prompt: "Describe this image in one sentence."
  mime_type: "image/jpeg"

fetch:
  timeout_secs: 10
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"

model:
  provider: "unknown"
"#;
