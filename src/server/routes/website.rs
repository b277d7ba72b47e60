use crate::error::ApiError;
use crate::server::router::PagewrightState;
use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

pub(super) async fn website_handler(
    State(state): State<PagewrightState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let artifact = state
        .generator
        .store()
        .get(&id)
        .ok_or(ApiError::WebsiteNotFound(id))?;

    Ok(Json(artifact.as_ref()).into_response())
}
