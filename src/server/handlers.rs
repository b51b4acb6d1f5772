use super::types::{DescribeParams, DescribeResponse, ErrorResponse, INTERNAL_ERROR_MESSAGE};
use crate::{Error, describe::Describer};
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub describer: Arc<Describer>,
}

pub async fn describe_image(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<DescribeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    let image_url = DescribeParams::from_query(query.as_deref())
        .url
        .unwrap_or_default();

    info!(%request_id, url = %image_url, "Received describe request");

    match state.describer.describe(&image_url).await {
        Ok(description) => {
            info!(%request_id, "Successfully described image");
            Ok(Json(DescribeResponse { description }))
        }
        Err(e) => Err(error_response(request_id, e)),
    }
}

/// Fetch failures are the caller's to see; everything else stays in the logs.
fn error_response(request_id: Uuid, e: Error) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        Error::Fetch(_) => {
            warn!(%request_id, "{}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        }
        _ => {
            error!(%request_id, "An error occurred: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: INTERNAL_ERROR_MESSAGE.to_string(),
                }),
            )
        }
    }
}
