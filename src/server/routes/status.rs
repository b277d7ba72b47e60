use super::extract::ApiJson;
use crate::error::ApiError;
use crate::server::router::PagewrightState;
use axum::{Json, extract::State};
use chrono::Utc;
use pagewright_schema::ProviderKind;
use pagewright_schema::site::{
    ConfigResponse, HealthResponse, TestProviderRequest, TestProviderResponse,
};
use tracing::info;

pub(super) async fn health_handler(State(state): State<PagewrightState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        available_providers: state.generator.providers().availability(),
    })
}

pub(super) async fn config_handler(State(state): State<PagewrightState>) -> Json<ConfigResponse> {
    let available_providers = state.generator.providers().availability();
    Json(ConfigResponse {
        available_providers,
        default_provider: available_providers.default_provider(),
    })
}

/// Sends a minimal completion to the named provider.
///
/// Unknown names and providers without a credential are rejected before any
/// upstream call.
pub(super) async fn test_provider_handler(
    State(state): State<PagewrightState>,
    ApiJson(body): ApiJson<TestProviderRequest>,
) -> Result<Json<TestProviderResponse>, ApiError> {
    let name = body.provider.unwrap_or_else(|| "unspecified".to_string());
    let providers = state.generator.providers();

    let kind = name
        .parse::<ProviderKind>()
        .ok()
        .filter(|kind| providers.availability().is_available(*kind))
        .ok_or_else(|| ApiError::ProviderUnavailable(name.clone()))?;

    providers
        .get(kind)
        .probe()
        .await
        .map_err(ApiError::ProviderTest)?;

    info!(provider = %kind, "Provider connectivity test passed");

    Ok(Json(TestProviderResponse {
        success: true,
        provider: kind,
        message: format!("{} connection successful", kind.display_name()),
    }))
}
