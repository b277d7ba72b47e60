use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Gemini API error response structure.
#[derive(Debug, Deserialize, Serialize)]
pub struct GeminiErrorBody {
    #[serde(rename = "error")]
    pub inner: GeminiErrorObject,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GeminiErrorObject {
    /// Numeric error code, usually equal to the HTTP status (`429`, `400`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,

    /// Human-readable error message from upstream.
    ///
    /// Example (`400`): `"API key not valid. Please pass a valid API key."`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Google-style canonical status name, e.g. `RESOURCE_EXHAUSTED`, `INVALID_ARGUMENT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Value>>,

    #[serde(default, flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl GeminiErrorBody {
    /// Human-readable summary, e.g. `RESOURCE_EXHAUSTED: Quota exceeded`.
    pub fn summary(&self) -> Option<String> {
        let message = self
            .inner
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())?;

        Some(match self.inner.status.as_deref().filter(|s| !s.is_empty()) {
            Some(status) => format!("{status}: {message}"),
            None => message.to_string(),
        })
    }
}
