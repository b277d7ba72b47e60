use super::{AvailableProviders, ProviderKind, timestamp_millis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWebsiteResponse {
    pub success: bool,
    pub website_id: String,
    pub code: String,
    pub provider: ProviderKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    #[serde(with = "timestamp_millis")]
    pub timestamp: DateTime<Utc>,
    pub available_providers: AvailableProviders,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub available_providers: AvailableProviders,
    pub default_provider: ProviderKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestProviderResponse {
    pub success: bool,
    pub provider: ProviderKind,
    pub message: String,
}
