use super::ProviderPreference;
use serde::{Deserialize, Serialize};

/// `POST /api/generate-website` body.
///
/// `prompt` is optional at the schema level so a missing prompt reaches the
/// generator and is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateWebsiteRequest {
    #[serde(default)]
    pub prompt: Option<String>,

    #[serde(default)]
    pub provider: ProviderPreference,
}

/// `POST /api/test-provider` body. The name is checked by the handler so any
/// string (or none) is accepted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestProviderRequest {
    #[serde(default)]
    pub provider: Option<String>,
}
