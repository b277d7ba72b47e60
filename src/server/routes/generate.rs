use super::extract::ApiJson;
use crate::error::ApiError;
use crate::server::router::PagewrightState;
use axum::{Json, extract::State};
use pagewright_schema::site::{GenerateWebsiteRequest, GenerateWebsiteResponse};

const GENERATED_MESSAGE: &str = "Website generated successfully!";

pub(super) async fn generate_website_handler(
    State(state): State<PagewrightState>,
    ApiJson(body): ApiJson<GenerateWebsiteRequest>,
) -> Result<Json<GenerateWebsiteResponse>, ApiError> {
    let generation = state.generator.generate_website(body.into()).await?;

    Ok(Json(GenerateWebsiteResponse {
        success: true,
        website_id: generation.artifact.id.clone(),
        code: generation.artifact.code.clone(),
        provider: generation.provider,
        message: GENERATED_MESSAGE.to_string(),
    }))
}
