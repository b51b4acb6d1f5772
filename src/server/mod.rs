pub mod handlers;
pub mod types;

use crate::{
    Error, Result,
    config::{Config, CorsConfig},
    describe::Describer,
    fetch::ImageFetcher,
    vision::VisionClient,
};
use axum::{Router, http::HeaderValue, routing::get};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Starts the HTTP server with an already constructed model client.
pub async fn run(config: Config, client: Arc<dyn VisionClient>) -> Result<()> {
    let fetcher = ImageFetcher::new(&config.fetch)?;
    let describer = Describer::from_config(fetcher, client, &config.model);

    let app_state = AppState {
        describer: Arc::new(describer),
    };

    let app = router(app_state, &config.server.cors)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(app_state: AppState, cors: &CorsConfig) -> Result<Router> {
    Ok(Router::new()
        .route("/describe_image", get(handlers::describe_image))
        .with_state(app_state)
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http()))
}

pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .map_err(|_| Error::config(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("CORS restricted to {} origins", origins.len());

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}
